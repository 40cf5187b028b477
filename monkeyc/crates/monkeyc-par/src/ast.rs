//! AST node definitions and their canonical re-serialization.
//!
//! Statements and expressions are two exhaustive enums; a parent node owns
//! its children outright, so a whole tree is released with its [`Program`].
//!
//! Every node exposes two observable properties:
//!
//! - `token_literal()` - the literal of the node's defining token.
//! - `Display` - a canonical textual form used by tests and the REPL echo.
//!   Spacing and parentheses are significant; prefix and infix expressions
//!   print fully parenthesized so the output spells out how the parser
//!   grouped the input.

use std::fmt;

use monkeyc_lex::Token;

/// A parsed source unit: an ordered sequence of statements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// The literal of the first statement's defining token, or the empty
    /// string for an empty program.
    pub fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(statement) => statement.token_literal(),
            None => "",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

/// A name appearing in source.
#[derive(Clone, Debug, PartialEq)]
pub struct Identifier {
    /// The `Identifier` token.
    pub token: Token,
    /// The name itself.
    pub value: String,
}

impl Identifier {
    /// The literal of the identifier token.
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A brace-delimited sequence of statements, used as the body of
/// conditionals and function literals.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    /// The `{` token.
    pub token: Token,
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

impl Block {
    /// The literal of the opening brace.
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

/// Statement variants.
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    /// `let name = value;` or `const name = value;`
    Declaration {
        /// The `let` or `const` keyword token.
        token: Token,
        /// The declared name.
        name: Identifier,
        /// The bound expression; absent when its parse failed.
        value: Option<Expression>,
    },

    /// `return value;`
    Return {
        /// The `return` keyword token.
        token: Token,
        /// The returned expression; absent when its parse failed.
        value: Option<Expression>,
    },

    /// A bare expression in statement position.
    Expression {
        /// The first token of the expression.
        token: Token,
        /// The expression; absent when its parse failed.
        expression: Option<Expression>,
    },

    /// A block in statement position.
    Block(Block),
}

impl Statement {
    /// The literal of the statement's defining token.
    pub fn token_literal(&self) -> &str {
        match self {
            Statement::Declaration { token, .. } => &token.literal,
            Statement::Return { token, .. } => &token.literal,
            Statement::Expression { token, .. } => &token.literal,
            Statement::Block(block) => block.token_literal(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Declaration { token, name, value } => {
                write!(f, "{} {} = ", token.literal, name)?;
                if let Some(value) = value {
                    write!(f, "{}", value)?;
                }
                write!(f, ";")
            }
            Statement::Return { token, value } => {
                write!(f, "{} ", token.literal)?;
                if let Some(value) = value {
                    write!(f, "{}", value)?;
                }
                write!(f, ";")
            }
            Statement::Expression { expression, .. } => match expression {
                Some(expression) => write!(f, "{}", expression),
                None => Ok(()),
            },
            Statement::Block(block) => write!(f, "{}", block),
        }
    }
}

/// Expression variants.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    /// A name reference.
    Identifier(Identifier),

    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The `Integer` token; its literal is the source spelling.
        token: Token,
        /// The parsed value.
        value: i64,
    },

    /// A 64-bit float literal. The token literal preserves the source
    /// spelling, so `.25` re-serializes as `.25`.
    FloatLiteral {
        /// The `Float` token.
        token: Token,
        /// The parsed value.
        value: f64,
    },

    /// `true` or `false`.
    Boolean {
        /// The `True` or `False` token.
        token: Token,
        /// The literal's value.
        value: bool,
    },

    /// A unary operator applied to an operand: `!x`, `-x`.
    Prefix {
        /// The operator token.
        token: Token,
        /// The operator spelling.
        operator: String,
        /// The operand.
        right: Box<Expression>,
    },

    /// A binary operator applied to two operands.
    Infix {
        /// The operator token.
        token: Token,
        /// Left operand.
        left: Box<Expression>,
        /// The operator spelling.
        operator: String,
        /// Right operand.
        right: Box<Expression>,
    },

    /// `if (cond) { ... }` with an optional `else { ... }`.
    IfElse {
        /// The `if` keyword token.
        token: Token,
        /// The condition.
        condition: Box<Expression>,
        /// The branch taken when the condition holds.
        consequence: Block,
        /// The `else` branch. Absent is distinct from an empty block.
        alternative: Option<Block>,
    },

    /// `fn(params) { body }`.
    FunctionLiteral {
        /// The `fn` keyword token.
        token: Token,
        /// Parameter names in order.
        parameters: Vec<Identifier>,
        /// The function body.
        body: Block,
    },

    /// `callee(args)`; the callee is an identifier or a function literal.
    Call {
        /// The `(` token that opened the argument list.
        token: Token,
        /// The called expression.
        function: Box<Expression>,
        /// Arguments in order.
        arguments: Vec<Expression>,
    },
}

impl Expression {
    /// The literal of the expression's defining token.
    pub fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(identifier) => identifier.token_literal(),
            Expression::IntegerLiteral { token, .. } => &token.literal,
            Expression::FloatLiteral { token, .. } => &token.literal,
            Expression::Boolean { token, .. } => &token.literal,
            Expression::Prefix { token, .. } => &token.literal,
            Expression::Infix { token, .. } => &token.literal,
            Expression::IfElse { token, .. } => &token.literal,
            Expression::FunctionLiteral { token, .. } => &token.literal,
            Expression::Call { token, .. } => &token.literal,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(identifier) => write!(f, "{}", identifier),
            Expression::IntegerLiteral { token, .. } => write!(f, "{}", token.literal),
            Expression::FloatLiteral { token, .. } => write!(f, "{}", token.literal),
            Expression::Boolean { token, .. } => write!(f, "{}", token.literal),
            Expression::Prefix {
                operator, right, ..
            } => {
                write!(f, "({}{})", operator, right)
            }
            Expression::Infix {
                left,
                operator,
                right,
                ..
            } => {
                write!(f, "({} {} {})", left, operator, right)
            }
            Expression::IfElse {
                condition,
                consequence,
                alternative,
                ..
            } => {
                write!(f, "if{}{}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, "else{}", alternative)?;
                }
                Ok(())
            }
            Expression::FunctionLiteral {
                token,
                parameters,
                body,
            } => {
                let params: Vec<String> =
                    parameters.iter().map(|p| p.to_string()).collect();
                write!(f, "{}({}) {}", token.literal, params.join(", "), body)
            }
            Expression::Call {
                function,
                arguments,
                ..
            } => {
                let args: Vec<String> =
                    arguments.iter().map(|a| a.to_string()).collect();
                write!(f, "{}({})", function, args.join(", "))
            }
        }
    }
}
