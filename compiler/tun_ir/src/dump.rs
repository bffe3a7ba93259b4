//! Field-labelled JSON dump of a program.
//!
//! Builds a serde view tree where every node carries a `NodeInfo` with its
//! `NodeType` and `NodeName`, names resolved through the interner, then
//! renders it with four-space indentation.

use serde::Serialize;

use crate::ast::{Block, ExprKind, Program, StmtKind};
use crate::{BinaryOp, ExprArena, ExprId, Param, StmtId, StringInterner};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NodeInfo {
    pub node_type: &'static str,
    pub node_name: &'static str,
}

impl NodeInfo {
    const fn new(node_type: &'static str, node_name: &'static str) -> Self {
        NodeInfo {
            node_type,
            node_name,
        }
    }
}

/// Serialisable view of a program.
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct ProgramView {
    pub statements: Vec<NodeView>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct OperatorView {
    #[serde(rename = "Type")]
    pub kind: &'static str,
    pub literal: &'static str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct BlockView {
    pub node_info: NodeInfo,
    pub statements: Vec<NodeView>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct IdentView {
    pub node_info: NodeInfo,
    pub value: &'static str,
}

/// One AST node, serialised without a variant tag; the `NodeInfo` field
/// identifies it.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum NodeView {
    #[serde(rename_all = "PascalCase")]
    VariableAssignment {
        node_info: NodeInfo,
        variable_name: &'static str,
        value: Box<NodeView>,
    },
    #[serde(rename_all = "PascalCase")]
    ReturnStatement {
        node_info: NodeInfo,
        return_value: Box<NodeView>,
    },
    #[serde(rename_all = "PascalCase")]
    Literal { node_info: NodeInfo, value: i64 },
    Identifier(IdentView),
    #[serde(rename_all = "PascalCase")]
    Complex {
        node_info: NodeInfo,
        left: Box<NodeView>,
        operator: OperatorView,
        right: Box<NodeView>,
    },
    #[serde(rename_all = "PascalCase")]
    FunctionLiteral {
        node_info: NodeInfo,
        parameters: Vec<IdentView>,
        body: BlockView,
    },
    #[serde(rename_all = "PascalCase")]
    FunctionCall {
        node_info: NodeInfo,
        function_name: &'static str,
        arguments: Vec<NodeView>,
    },
}

struct ViewBuilder<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
}

impl ViewBuilder<'_> {
    fn stmt(&self, id: StmtId) -> NodeView {
        let stmt = self.arena.get_stmt(id);
        let info = NodeInfo::new(stmt.kind.node_type(), stmt.kind.node_name());
        match stmt.kind {
            StmtKind::Let { name, value } => NodeView::VariableAssignment {
                node_info: info,
                variable_name: self.interner.lookup(name),
                value: Box::new(self.expr(value)),
            },
            StmtKind::Return(value) => NodeView::ReturnStatement {
                node_info: info,
                return_value: Box::new(self.expr(value)),
            },
        }
    }

    fn expr(&self, id: ExprId) -> NodeView {
        let expr = self.arena.get_expr(id);
        let info = NodeInfo::new(expr.kind.node_type(), expr.kind.node_name());
        match expr.kind {
            ExprKind::Literal(value) => NodeView::Literal {
                node_info: info,
                value,
            },
            ExprKind::Ident(name) => NodeView::Identifier(IdentView {
                node_info: info,
                value: self.interner.lookup(name),
            }),
            ExprKind::Binary { left, op, right } => NodeView::Complex {
                node_info: info,
                left: Box::new(self.expr(left)),
                operator: operator_view(op),
                right: Box::new(self.expr(right)),
            },
            ExprKind::Function { params, body } => NodeView::FunctionLiteral {
                node_info: info,
                parameters: self
                    .arena
                    .get_params(params)
                    .iter()
                    .map(|param| self.param(param))
                    .collect(),
                body: self.block(&body),
            },
            ExprKind::Call { func, args } => NodeView::FunctionCall {
                node_info: info,
                function_name: self.interner.lookup(func),
                arguments: self
                    .arena
                    .get_expr_list(args)
                    .iter()
                    .map(|&arg| self.expr(arg))
                    .collect(),
            },
        }
    }

    fn param(&self, param: &Param) -> IdentView {
        IdentView {
            node_info: NodeInfo::new("Expression", "IdentifierExpression"),
            value: self.interner.lookup(param.name),
        }
    }

    fn block(&self, block: &Block) -> BlockView {
        BlockView {
            node_info: NodeInfo::new(block.node_type(), block.node_name()),
            statements: self
                .arena
                .get_stmt_list(block.stmts)
                .iter()
                .map(|&id| self.stmt(id))
                .collect(),
        }
    }
}

fn operator_view(op: BinaryOp) -> OperatorView {
    match op {
        BinaryOp::Add => OperatorView {
            kind: "PLUS",
            literal: "+",
        },
        BinaryOp::Sub => OperatorView {
            kind: "MINUS",
            literal: "-",
        },
    }
}

/// Build the serialisable view of a program.
pub fn program_view(program: &Program, interner: &StringInterner) -> ProgramView {
    let builder = ViewBuilder {
        arena: &program.arena,
        interner,
    };
    ProgramView {
        statements: builder
            .arena
            .get_stmt_list(program.statements)
            .iter()
            .map(|&id| builder.stmt(id))
            .collect(),
    }
}

/// Render a program as indented JSON.
pub fn to_json(program: &Program, interner: &StringInterner) -> Result<String, serde_json::Error> {
    let view = program_view(program, interner);
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    view.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}
