/// Resource limits and grammar switches for a [`QueryParser`](crate::QueryParser).
///
/// The limits bound the work a single document can demand: breadth through
/// `max_fields` and `max_arguments`, and recursion through `max_depth`.
///
/// ```
/// use qcode_parser::ParserOptions;
///
/// let options = ParserOptions::default()
///     .max_depth(8)
///     .require_homogeneous_lists(true);
/// assert_eq!(options.max_fields, 100);
/// assert_eq!(options.max_depth, 8);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParserOptions {
    /// Maximum number of fields in one operation, counted across all
    /// nesting levels.
    pub max_fields: usize,

    /// Maximum number of arguments in one argument list.
    pub max_arguments: usize,

    /// Maximum nesting depth. The operation's selection set is level 1;
    /// every nested selection set, list and object adds a level.
    pub max_depth: usize,

    /// Reject lists whose elements are not all of the first element's
    /// [`ValueKind`](crate::ast::ValueKind).
    pub require_homogeneous_lists: bool,
}

impl ParserOptions {
    pub const DEFAULT_MAX_FIELDS: usize = 100;
    pub const DEFAULT_MAX_ARGUMENTS: usize = 20;
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    pub fn max_fields(mut self, max_fields: usize) -> Self {
        self.max_fields = max_fields;
        self
    }

    pub fn max_arguments(mut self, max_arguments: usize) -> Self {
        self.max_arguments = max_arguments;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn require_homogeneous_lists(mut self, require: bool) -> Self {
        self.require_homogeneous_lists = require;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_fields: Self::DEFAULT_MAX_FIELDS,
            max_arguments: Self::DEFAULT_MAX_ARGUMENTS,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            require_homogeneous_lists: false,
        }
    }
}
