//! Public AST types for message templates.
//!
//! These types are public so that external tooling (linters, catalog
//! compilers, the CLI) can inspect parsed templates.

use std::collections::BTreeSet;

/// The option key used when no other option matches.
pub const OTHER_KEY: &str = "other";

/// A parsed template node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Concatenation of parts. Never directly nested in another sequence.
    Sequence(Vec<Node>),
    /// Literal text, emitted verbatim.
    Literal(String),
    /// `#` inside a plural option: the number selecting that option.
    NumberField,
    /// `{name}`
    Placeholder(String),
    /// `{name, plural|select, key{...} ...}`
    Branch(Branch),
}

/// Branch operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchKind {
    Plural,
    Select,
}

/// A plural or select construct.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    /// Name of the value this branch selects on.
    pub name: String,
    pub kind: BranchKind,
    /// Options in source order. Keys are unique.
    pub options: Vec<BranchOption>,
}

/// One `key{content}` arm of a branch.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchOption {
    pub key: String,
    pub content: Node,
}

impl BranchKind {
    /// Operator names accepted by the parser.
    pub const OPERATORS: [&'static str; 2] = ["plural", "select"];

    /// Resolve an operator name.
    pub fn from_operator(operator: &str) -> Option<BranchKind> {
        match operator {
            "plural" => Some(BranchKind::Plural),
            "select" => Some(BranchKind::Select),
            _ => None,
        }
    }

    /// The operator name as written in templates.
    pub fn operator(self) -> &'static str {
        match self {
            BranchKind::Plural => "plural",
            BranchKind::Select => "select",
        }
    }
}

impl Branch {
    /// Create a branch with no options yet.
    pub fn new(name: impl Into<String>, kind: BranchKind) -> Self {
        Branch {
            name: name.into(),
            kind,
            options: Vec::new(),
        }
    }

    /// Add an option. A repeated key replaces the earlier content but keeps
    /// its original position.
    pub fn insert_option(&mut self, key: impl Into<String>, content: Node) {
        let key = key.into();
        if let Some(existing) = self.options.iter_mut().find(|o| o.key == key) {
            existing.content = content;
        } else {
            self.options.push(BranchOption { key, content });
        }
    }

    /// Get the option with exactly this key.
    pub fn option(&self, key: &str) -> Option<&Node> {
        self.options
            .iter()
            .find(|o| o.key == key)
            .map(|o| &o.content)
    }

    /// Get the option for `key`, falling back to `other`.
    pub fn select(&self, key: &str) -> Option<&Node> {
        select_option(self.options.iter().map(|o| (o.key.as_str(), &o.content)), key)
    }

    /// Get the keys of all options in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.key.as_str())
    }
}

/// Pick the option for `key`, falling back to the `other` option.
///
/// This is the branch-selection rule shared by the interpreter and the
/// runtime helpers called from generated code.
pub fn select_option<'a, T, I>(options: I, key: &str) -> Option<&'a T>
where
    T: ?Sized,
    I: IntoIterator<Item = (&'a str, &'a T)>,
    I::IntoIter: Clone,
{
    let options = options.into_iter();
    options
        .clone()
        .find(|(k, _)| *k == key)
        .or_else(|| options.clone().find(|(k, _)| *k == OTHER_KEY))
        .map(|(_, value)| value)
}

impl Node {
    /// Build a node from sequence parts, collapsing a single part.
    pub fn from_parts(mut parts: Vec<Node>) -> Node {
        if parts.len() == 1 {
            parts.remove(0)
        } else {
            Node::Sequence(parts)
        }
    }

    /// Check whether this subtree contains any branch.
    pub fn contains_branch(&self) -> bool {
        match self {
            Node::Branch(_) => true,
            Node::Sequence(parts) => parts.iter().any(Node::contains_branch),
            Node::Literal(_) | Node::NumberField | Node::Placeholder(_) => false,
        }
    }

    /// Get the text of a subtree made only of literals.
    ///
    /// Returns `None` if the subtree contains placeholders, number fields or
    /// branches.
    pub fn literal_text(&self) -> Option<String> {
        match self {
            Node::Literal(text) => Some(text.clone()),
            Node::Sequence(parts) => parts.iter().map(Node::literal_text).collect(),
            Node::NumberField | Node::Placeholder(_) | Node::Branch(_) => None,
        }
    }

    /// Get the names of all values this template reads, sorted.
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            Node::Placeholder(name) => {
                names.insert(name);
            }
            Node::Branch(branch) => {
                names.insert(&branch.name);
                for option in &branch.options {
                    option.content.collect_variables(names);
                }
            }
            Node::Sequence(parts) => {
                for part in parts {
                    part.collect_variables(names);
                }
            }
            Node::Literal(_) | Node::NumberField => {}
        }
    }
}
