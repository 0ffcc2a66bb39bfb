// Fun AST Definitions
// Abstract Syntax Tree nodes with source positions

use std::fmt;

/// Source position information for AST nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    /// 1-based line of the first character
    pub line: usize,
    /// 1-based column of the first character
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Span for nodes built outside of any source text (debugger input, tests)
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::new(span.start.into(), span.len())
    }
}

/// A whole source file
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub block: Block,
    pub span: Span,
}

/// An ordered list of statements. Does not open a scope on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub kind: StatementKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    FunctionDefinition(FunctionDefinition),
    ScopedBlock(ScopedBlock),
    VariableDefinition(VariableDefinition),
    WhileLoop(WhileLoop),
    IfClause(IfClause),
    VariableAssignment(VariableAssignment),
    PrintCall(PrintCall),
    Return(ReturnStatement),
    Expression(Expression),
}

impl Statement {
    /// Source line the statement starts on
    pub fn line(&self) -> usize {
        self.span.line
    }
}

/// `fun name(a, b) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub name: Identifier,
    pub parameters: Vec<Identifier>,
    pub body: Block,
    pub span: Span,
}

impl FunctionDefinition {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// A `{ }`-delimited block which introduces a new scope
#[derive(Debug, Clone, PartialEq)]
pub struct ScopedBlock {
    pub block: Block,
    pub span: Span,
}

/// `var name = initializer`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDefinition {
    pub name: Identifier,
    pub initializer: Expression,
    pub span: Span,
}

/// `while (condition) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoop {
    pub condition: Expression,
    pub body: ScopedBlock,
    pub span: Span,
}

/// `if (condition) { ... } else { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct IfClause {
    pub condition: Expression,
    pub then_body: ScopedBlock,
    pub else_body: Option<ScopedBlock>,
    pub span: Span,
}

/// `name = value`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableAssignment {
    pub name: Identifier,
    pub value: Expression,
    pub span: Span,
}

/// `println(a, b, ...)`
#[derive(Debug, Clone, PartialEq)]
pub struct PrintCall {
    pub arguments: Vec<Expression>,
    pub span: Span,
}

/// `return value`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub value: Expression,
    pub span: Span,
}

/// Expressions always evaluate to exactly one integer
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionKind {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    FunctionCall(FunctionCall),
    Parenthesized(Box<Expression>),
    BinaryOp(BinaryOperation),
}

impl Expression {
    pub fn identifier(name: impl Into<String>) -> Self {
        let identifier = Identifier::new(name);
        Self {
            span: identifier.span,
            kind: ExpressionKind::Identifier(identifier),
        }
    }

    pub fn integer(value: i32) -> Self {
        Self {
            kind: ExpressionKind::Integer(IntegerLiteral {
                value,
                span: Span::detached(),
            }),
            span: Span::detached(),
        }
    }

    pub fn call(name: impl Into<String>, arguments: Vec<Expression>) -> Self {
        Self {
            kind: ExpressionKind::FunctionCall(FunctionCall {
                name: Identifier::new(name),
                arguments,
                span: Span::detached(),
            }),
            span: Span::detached(),
        }
    }

    pub fn parenthesized(inner: Expression) -> Self {
        Self {
            kind: ExpressionKind::Parenthesized(Box::new(inner)),
            span: Span::detached(),
        }
    }

    pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Self {
        Self {
            kind: ExpressionKind::BinaryOp(BinaryOperation {
                left: Box::new(left),
                operator,
                right: Box::new(right),
                span: Span::detached(),
            }),
            span: Span::detached(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            span: Span::detached(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub value: i32,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: Identifier,
    pub arguments: Vec<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperation {
    pub left: Box<Expression>,
    pub operator: BinaryOperator,
    pub right: Box<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Equal,
    NotEqual,
    LessEqual,
    Less,
    GreaterEqual,
    Greater,
    LogicalAnd,
    LogicalOr,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::Less => "<",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::Greater => ">",
            BinaryOperator::LogicalAnd => "&&",
            BinaryOperator::LogicalOr => "||",
        }
    }

    /// Division and remainder are undefined for a zero divisor
    pub fn is_partial(&self) -> bool {
        matches!(self, BinaryOperator::Divide | BinaryOperator::Modulo)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// Source reconstruction

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExpressionKind::Identifier(identifier) => write!(f, "{identifier}"),
            ExpressionKind::Integer(literal) => write!(f, "{}", literal.value),
            ExpressionKind::FunctionCall(call) => {
                write!(f, "{}(", call.name)?;
                write_comma_separated(f, &call.arguments)?;
                f.write_str(")")
            }
            ExpressionKind::Parenthesized(inner) => write!(f, "({inner})"),
            ExpressionKind::BinaryOp(operation) => write!(
                f,
                "{} {} {}",
                operation.left, operation.operator, operation.right
            ),
        }
    }
}

fn write_comma_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.block)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, statement) in self.statements.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ScopedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_braced(f, &self.block)
    }
}

fn write_braced(f: &mut fmt::Formatter<'_>, block: &Block) -> fmt::Result {
    if block.statements.is_empty() {
        return f.write_str("{\n}");
    }
    let body = block.to_string().replace('\n', "\n\t");
    write!(f, "{{\n\t{body}\n}}")
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StatementKind::FunctionDefinition(function) => {
                write!(f, "fun {}(", function.name)?;
                write_comma_separated(f, &function.parameters)?;
                f.write_str(") ")?;
                write_braced(f, &function.body)
            }
            StatementKind::ScopedBlock(scoped) => write!(f, "{scoped}"),
            StatementKind::VariableDefinition(definition) => {
                write!(f, "var {} = {}", definition.name, definition.initializer)
            }
            StatementKind::WhileLoop(while_loop) => {
                write!(f, "while ({}) {}", while_loop.condition, while_loop.body)
            }
            StatementKind::IfClause(if_clause) => {
                write!(f, "if ({}) {}", if_clause.condition, if_clause.then_body)?;
                if let Some(else_body) = &if_clause.else_body {
                    write!(f, " else {else_body}")?;
                }
                Ok(())
            }
            StatementKind::VariableAssignment(assignment) => {
                write!(f, "{} = {}", assignment.name, assignment.value)
            }
            StatementKind::PrintCall(print) => {
                f.write_str("println(")?;
                write_comma_separated(f, &print.arguments)?;
                f.write_str(")")
            }
            StatementKind::Return(return_statement) => {
                write!(f, "return {}", return_statement.value)
            }
            StatementKind::Expression(expression) => write!(f, "{expression}"),
        }
    }
}
