//! Facade-level resolution and diagnostics flow

use alder::frontend::ast::{Ast, NodeKind, TreeError};
use alder::frontend::{Frontend, FrontendError};

#[test]
fn resolution_miss_is_reported_with_position() {
    let mut frontend = Frontend::new();
    let mut ast = Ast::new();
    let root = ast.alloc(NodeKind::block(), None);
    let usage = ast.alloc(NodeKind::usage("ghost"), Some(root));
    ast.set_line_no(usage, 7);
    frontend.confirm(&mut ast, usage).unwrap();

    let err = frontend.resolve(&ast, usage, "ghost").unwrap_err();
    match err {
        FrontendError::Undefined { name, position } => {
            assert_eq!(name, "ghost");
            assert_eq!(position.map(|p| p.line), Some(7));
        }
        other => panic!("expected undefined error, got {other}"),
    }

    let diags = frontend.diagnostics();
    assert_eq!(diags.error_count(), 1);
    let rendered = diags.iter().next().unwrap().to_string();
    assert_eq!(rendered, "error: undefined symbol `ghost` at 7:0");
}

#[test]
fn structural_error_is_recorded_and_isolated() {
    let mut frontend = Frontend::new();
    let mut ast = Ast::new();
    let leaf = ast.alloc(NodeKind::number("1"), None);
    let child = ast.alloc(NodeKind::binding("x"), Some(leaf));
    ast.set_line_no(child, 3);

    let err = frontend.resolve(&ast, leaf, "x").unwrap_err();
    assert!(matches!(err, FrontendError::Undefined { .. }));

    let err = frontend.confirm(&mut ast, child).unwrap_err();
    assert!(matches!(
        err,
        FrontendError::Structure(TreeError::InvalidParent { .. })
    ));
    assert_eq!(frontend.diagnostics().error_count(), 2);

    // the failure is isolated: the same context keeps working
    let root = ast.alloc(NodeKind::block(), None);
    let ok = ast.alloc(NodeKind::binding("x"), Some(root));
    frontend.confirm(&mut ast, ok).unwrap();
    assert_eq!(frontend.resolve(&ast, root, "x").unwrap(), ok);
}

#[test]
fn take_diagnostics_leaves_a_fresh_collector() {
    let mut frontend = Frontend::new();
    let mut ast = Ast::new();
    let root = ast.alloc(NodeKind::block(), None);

    assert!(frontend.resolve(&ast, root, "missing").is_err());
    let taken = frontend.take_diagnostics();
    assert_eq!(taken.error_count(), 1);
    assert!(frontend.diagnostics().is_empty());
}
