use crate::ast::{Expression, Type};

/// `name: type`
#[derive(Debug, Clone)]
pub struct Declaration {
    name: String,
    ty: Type,
}

impl Declaration {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> Type {
        self.ty
    }
}

/// `name = value`
#[derive(Debug, Clone)]
pub struct Assignment {
    name: String,
    value: Box<Expression>,
}

impl Assignment {
    pub fn new(name: impl Into<String>, value: Expression) -> Self {
        Self {
            name: name.into(),
            value: Box::new(value),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Expression {
        &self.value
    }
}

#[derive(Debug, Clone)]
pub enum Statement {
    Declaration(Declaration),
    Assignment(Assignment),
}

impl From<Declaration> for Statement {
    fn from(value: Declaration) -> Self {
        Statement::Declaration(value)
    }
}

impl From<Assignment> for Statement {
    fn from(value: Assignment) -> Self {
        Statement::Assignment(value)
    }
}

#[derive(Debug, Clone)]
pub struct Function {
    parameters: Vec<(String, Type)>,
    return_type: Type,
    body: Vec<Statement>,
}

impl Function {
    pub fn new(parameters: Vec<(String, Type)>, return_type: Type, body: Vec<Statement>) -> Self {
        Self {
            parameters,
            return_type,
            body,
        }
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &[(String, Type)] {
        &self.parameters
    }

    pub fn return_type(&self) -> Type {
        self.return_type
    }

    pub fn body(&self) -> &[Statement] {
        &self.body
    }
}

/// The root of the tree: every function of one source file, in order.
#[derive(Debug, Clone, Default)]
pub struct File {
    functions: Vec<Function>,
}

impl File {
    pub fn new(functions: Vec<Function>) -> Self {
        Self { functions }
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }
}
