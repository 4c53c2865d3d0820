/// **(internal)** Explicitly test different logical identities and properties.
mod _test_expression_logic_basic;

/// **(internal)** Generate pseudo-random expression trees, print and re-compile them and
/// exhaustively verify that the compiled `Expression` evaluates like the tree.
mod _test_expression_logic_fuzzing;
