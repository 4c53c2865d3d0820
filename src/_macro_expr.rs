use crate::Expression;

/// A macro for writing `Expression` trees directly in Rust code. Single-letter identifiers are
/// variables and you can use operators `!` (not), `&` (and), `|` (or), `^` (xor),
/// `=>` (implication), `<=` (reverse implication) and `<=>` (bi-implication). Nand and nor
/// have no corresponding Rust token, use `Expression::mk_binary` for them.
///
/// Sadly, except for the very top expression, every level needs to be enclosed
/// in parentheses since rust macros cannot parse complex expressions with
/// potential ambiguities. You can't write `p & q & r`, you have to use `p & (q & r)`.
/// Also `!p & q` is not permitted, you have to use `(!p) & q`.
///
/// ```rust
/// use propositional_compiler::{compile, expr};
/// assert_eq!(compile("¬p ∧ (q → r)").unwrap(), expr!((!p) & (q => r)));
/// ```
#[macro_export]
macro_rules! expr {
    (@binary $op:ident, $l:tt, $r:tt) => {
        $crate::Expression::mk_binary(
            $crate::BinaryOperator::$op,
            $crate::expr!($l),
            $crate::expr!($r),
        )
    };
    // Parenthesis elimination:
    ( ( $($e:tt)* ) ) => { $crate::expr!($($e)*) };
    // Variables:
    ($v:ident) => { $crate::Expression::mk_var_named(stringify!($v)) };
    // Boolean operations:
    (!$e:tt) => { $crate::Expression::mk_not($crate::expr!($e)) };
    ($l:tt & $r:tt) => { $crate::expr!(@binary And, $l, $r) };
    ($l:tt | $r:tt) => { $crate::expr!(@binary Or, $l, $r) };
    ($l:tt ^ $r:tt) => { $crate::expr!(@binary Xor, $l, $r) };
    ($l:tt <=> $r:tt) => { $crate::expr!(@binary BiImplication, $l, $r) };
    ($l:tt => $r:tt) => { $crate::expr!(@binary Implication, $l, $r) };
    ($l:tt <= $r:tt) => { $crate::expr!(@binary ReverseImplication, $l, $r) };
}

impl Expression {
    /// Create a variable expression from a one-character name.
    ///
    /// *Panics:* `name` must consist of exactly one character.
    pub fn mk_var_named(name: &str) -> Expression {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Expression::mk_var(c),
            _ => panic!("Variable name `{}` is not a single character.", name),
        }
    }
}
