#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use crate::dump;
use crate::pretty::Printer;
use crate::{
    BinaryOp, Block, Expr, ExprArena, ExprKind, Param, Program, Span, Stmt, StmtKind,
    StringInterner,
};

/// `let add = function(a, b) { return a + b }` and `let e = add(1, 20)`.
fn add_program(interner: &StringInterner) -> Program {
    let sp = Span::DUMMY;
    let a = interner.intern("a");
    let b = interner.intern("b");
    let add = interner.intern("add");
    let e = interner.intern("e");

    let mut arena = ExprArena::new();
    let a_ref = arena.alloc_expr(Expr::new(ExprKind::Ident(a), sp));
    let b_ref = arena.alloc_expr(Expr::new(ExprKind::Ident(b), sp));
    let sum = arena.alloc_expr(Expr::new(
        ExprKind::Binary {
            left: a_ref,
            op: BinaryOp::Add,
            right: b_ref,
        },
        sp,
    ));
    let ret = arena.alloc_stmt(Stmt::new(StmtKind::Return(sum), sp));
    let params = arena.alloc_params([Param { name: a, span: sp }, Param { name: b, span: sp }]);
    let stmts = arena.alloc_stmt_list([ret]);
    let func = arena.alloc_expr(Expr::new(
        ExprKind::Function {
            params,
            body: Block { stmts, span: sp },
        },
        sp,
    ));
    let let_add = arena.alloc_stmt(Stmt::new(
        StmtKind::Let {
            name: add,
            value: func,
        },
        sp,
    ));

    let one = arena.alloc_expr(Expr::new(ExprKind::Literal(1), sp));
    let twenty = arena.alloc_expr(Expr::new(ExprKind::Literal(20), sp));
    let args = arena.alloc_expr_list([one, twenty]);
    let call = arena.alloc_expr(Expr::new(ExprKind::Call { func: add, args }, sp));
    let let_e = arena.alloc_stmt(Stmt::new(
        StmtKind::Let {
            name: e,
            value: call,
        },
        sp,
    ));

    let top = arena.alloc_stmt_list([let_add, let_e]);
    Program::new(top, arena)
}

#[test]
fn node_tags() {
    let interner = StringInterner::new();
    let program = add_program(&interner);
    let names: Vec<_> = program.statements().map(|s| s.kind.node_name()).collect();
    assert_eq!(names, vec!["VariableAssignment", "VariableAssignment"]);

    let StmtKind::Let { value, .. } = program.statements().next().unwrap().kind else {
        panic!("expected let");
    };
    let kind = program.arena.get_expr(value).kind;
    assert_eq!(kind.node_name(), "FunctionLiteral");
    assert_eq!(kind.node_type(), "Expression");
}

#[test]
fn printer_renders_source_form() {
    let interner = StringInterner::new();
    let program = add_program(&interner);
    let printer = Printer::new(&program.arena, &interner);
    let rendered: Vec<String> = program
        .arena
        .get_stmt_list(program.statements)
        .iter()
        .map(|&id| printer.stmt(id))
        .collect();

    assert_eq!(
        rendered,
        vec![
            "let add = function(a, b) { return a + b; }".to_string(),
            "let e = add(1, 20)".to_string(),
        ]
    );
}

#[test]
fn printer_empty_function() {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let params = arena.alloc_params([]);
    let stmts = arena.alloc_stmt_list([]);
    let func = arena.alloc_expr(Expr::new(
        ExprKind::Function {
            params,
            body: Block {
                stmts,
                span: Span::DUMMY,
            },
        },
        Span::DUMMY,
    ));
    assert_eq!(Printer::new(&arena, &interner).expr(func), "function() {}");
}

#[test]
fn dump_labels_every_node() {
    let interner = StringInterner::new();
    let program = add_program(&interner);
    let json = dump::to_json(&program, &interner).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let first = &value["Statements"][0];
    assert_eq!(first["NodeInfo"]["NodeType"], "Statement");
    assert_eq!(first["NodeInfo"]["NodeName"], "VariableAssignment");
    assert_eq!(first["VariableName"], "add");

    let func = &first["Value"];
    assert_eq!(func["NodeInfo"]["NodeName"], "FunctionLiteral");
    assert_eq!(func["Parameters"][1]["Value"], "b");
    assert_eq!(func["Body"]["NodeInfo"]["NodeName"], "BlockStatement");

    let ret = &func["Body"]["Statements"][0];
    assert_eq!(ret["ReturnValue"]["Operator"]["Type"], "PLUS");
    assert_eq!(ret["ReturnValue"]["Left"]["Value"], "a");

    let call = &value["Statements"][1]["Value"];
    assert_eq!(call["FunctionName"], "add");
    assert_eq!(call["Arguments"][1]["Value"], 20);
}

#[test]
fn dump_uses_four_space_indent() {
    let interner = StringInterner::new();
    let program = Program::default();
    let json = dump::to_json(&program, &interner).unwrap();
    assert_eq!(json, "{\n    \"Statements\": []\n}");
}
