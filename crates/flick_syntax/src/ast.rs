//! Abstract Syntax Tree definitions for Flick
//!
//! The tree is a strict ownership hierarchy: every child is owned by exactly one parent sequence and nothing points
//! back up. Numeric literals keep their source text; converting them is left to whatever consumes the tree.
//!
//! ## Notes
//! - There is no call node. `print(x)` is an `Ident` followed by a `ParenBlock` in the enclosing body.
//! - Serializes internally tagged by `type`, e.g. `{"type":"Ident","value":"x"}`.

use serde::Serialize;

/// The root of one compilation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub body: Vec<Node>,
}

/// One AST node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    /// A function literal defined outside any block.
    TopLevelFuncDef { body: Vec<Node> },
    /// A function literal defined inside a function or if/else block.
    FuncDef { body: Vec<Node> },
    ReturnExpression { body: Vec<Node> },
    AssignExpression { name: String, body: Vec<Node> },
    /// `[...]`
    Array { body: Vec<Node> },
    /// `{...}`
    ArrayLiteral { body: Vec<Node> },
    /// `(...)`
    ParenBlock { body: Vec<Node> },
    StringObj { value: String },
    NumberObj { value: String },
    /// Prefix application of `+ - * / ^` to exactly one operand.
    Operator { value: String, operand: Box<Node> },
    Ident { value: String },
    IfStatement { condition: Vec<Node>, body: Vec<Node> },
    ElseStatement { body: Vec<Node> },
}

impl Node {
    /// The node's variant name, matching its serialized `type` tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::TopLevelFuncDef { .. } => "TopLevelFuncDef",
            Node::FuncDef { .. } => "FuncDef",
            Node::ReturnExpression { .. } => "ReturnExpression",
            Node::AssignExpression { .. } => "AssignExpression",
            Node::Array { .. } => "Array",
            Node::ArrayLiteral { .. } => "ArrayLiteral",
            Node::ParenBlock { .. } => "ParenBlock",
            Node::StringObj { .. } => "StringObj",
            Node::NumberObj { .. } => "NumberObj",
            Node::Operator { .. } => "Operator",
            Node::Ident { .. } => "Ident",
            Node::IfStatement { .. } => "IfStatement",
            Node::ElseStatement { .. } => "ElseStatement",
        }
    }

    /// The node's body sequence, if it is block-shaped.
    pub fn body(&self) -> Option<&[Node]> {
        match self {
            Node::TopLevelFuncDef { body }
            | Node::FuncDef { body }
            | Node::ReturnExpression { body }
            | Node::AssignExpression { body, .. }
            | Node::Array { body }
            | Node::ArrayLiteral { body }
            | Node::ParenBlock { body }
            | Node::IfStatement { body, .. }
            | Node::ElseStatement { body } => Some(body.as_slice()),
            Node::StringObj { .. } | Node::NumberObj { .. } | Node::Operator { .. } | Node::Ident { .. } => None,
        }
    }

    /// Direct children in source order: condition, then body, then operand.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::IfStatement { condition, body } => condition.iter().chain(body.iter()).collect(),
            Node::Operator { operand, .. } => vec![operand.as_ref()],
            _ => self.body().map(|b| b.iter().collect()).unwrap_or_default(),
        }
    }

    pub fn ident(value: impl Into<String>) -> Self {
        Node::Ident { value: value.into() }
    }

    pub fn number(value: impl Into<String>) -> Self {
        Node::NumberObj { value: value.into() }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::StringObj { value: value.into() }
    }
}

impl Program {
    /// Visit every node in the tree, depth-first, parents before children.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        fn go<'a>(node: &'a Node, visit: &mut impl FnMut(&'a Node)) {
            visit(node);
            for child in node.children() {
                go(child, visit);
            }
        }
        for node in &self.body {
            go(node, visit);
        }
    }

    /// Total number of nodes below the root.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count
    }
}
