//! End-to-end front-end flow
//!
//! Drives the crate the way an external parser would: tokenize a small
//! program, build the tree bottom-up with intended parents, confirm each
//! node once it is fully populated, then inspect the result.

use alder::frontend::ast::{Ast, NodeKind};
use alder::frontend::lexer::tokens::TokenKind;
use alder::frontend::Frontend;

const SOURCE: &str = "main\n\tx = 1\n\ty = x + 2";

#[test]
fn tokens_arrive_in_stream_order_with_positions() {
    let frontend = Frontend::new();
    let tokens = frontend.tokenize(SOURCE);

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Symbol,  // main
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Symbol,  // x
            TokenKind::Operator,
            TokenKind::Integer, // 1
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Symbol,  // y
            TokenKind::Operator,
            TokenKind::Symbol,  // x
            TokenKind::Operator,
            TokenKind::Integer, // 2
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[0].pos.line, 1);
    assert_eq!(tokens[3].pos.line, 2);
    assert_eq!(tokens[8].pos.line, 3);
}

#[test]
fn parsed_tree_resolves_and_renders() {
    let frontend = Frontend::new();
    let tokens = frontend.tokenize(SOURCE);

    // a parser would walk the token stream; here the interesting tokens are
    // picked out by hand to build the tree they describe
    let mut ast = Ast::new();
    let func = ast.alloc(NodeKind::function(tokens[0].text.clone()), None);
    ast.set_line_no(func, tokens[0].pos.line);

    let x = ast.alloc(NodeKind::binding(tokens[3].text.clone()), Some(func));
    ast.set_line_no(x, tokens[3].pos.line);
    ast.set_indentation_level(x, 1);
    ast.confirm(x).unwrap();

    let y = ast.alloc(NodeKind::binding(tokens[8].text.clone()), Some(func));
    ast.set_line_no(y, tokens[8].pos.line);
    ast.set_indentation_level(y, 1);
    ast.confirm(y).unwrap();

    let x_ref = ast.alloc(NodeKind::usage(tokens[10].text.clone()), Some(func));
    ast.set_line_no(x_ref, tokens[10].pos.line);
    ast.confirm(x_ref).unwrap();

    // the usage of `x` on line 3 resolves to the binding on line 2
    assert_eq!(ast.declaration_of(x_ref), Some(x));
    assert_eq!(ast.node(x).line_no(), Some(2));
    assert_eq!(ast.node(x).indentation_level(), Some(1));

    let expected = "\
function main:
  binding x
  binding y
  usage x
";
    assert_eq!(ast.render(func), expected);
}
