//! Minimal single-character flag parsing.
//!
//! Options are registered in an [`OptionList`] as `(name, callback)` pairs.
//! [`parse_options`] walks the leading `-x` arguments, runs the matching
//! callbacks in order and returns the index of the first argument it did not
//! consume, so callers can continue with positional arguments from there.
//!
//! ```
//! use std::cell::Cell;
//! use shortopt::{OptionList, parse_options};
//!
//! let verbose = Cell::new(false);
//! let mut options = OptionList::new().with('v', || {
//!     verbose.set(true);
//!     true
//! })?;
//!
//! let args = ["-v", "input.txt"];
//! let cursor = parse_options(&args, &mut options)?;
//! assert!(verbose.get());
//! assert_eq!(&args[cursor..], ["input.txt"]);
//! # Ok::<(), shortopt::OptionError>(())
//! ```

pub use error::OptionError;
pub use list::{OptionList, ShortOption};
pub use parse::{make_printable, parse_options, remaining_args};

pub mod error {
    use crate::parse::make_printable;

    /// Errors produced while registering or parsing options.
    #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
    pub enum OptionError {
        /// A `-x` argument whose character is not registered.
        #[error("invalid option '-{}'", printable(.0))]
        InvalidOption(char),
        /// An option name registered twice in the same list.
        #[error("duplicate option '-{}'", printable(.0))]
        DuplicateOption(char),
    }

    impl OptionError {
        /// The option character the error refers to.
        pub fn name(&self) -> char {
            match self {
                Self::InvalidOption(c) | Self::DuplicateOption(c) => *c,
            }
        }
    }

    pub type OptionResult<T> = Result<T, OptionError>;

    fn printable(c: &char) -> String {
        make_printable(*c)
    }
}

pub mod list {
    use std::fmt;

    use crate::error::{OptionError, OptionResult};

    /// A single-character flag bound to the callback that runs when it is seen.
    ///
    /// The callback captures whatever state it needs and returns whether
    /// parsing should continue with the next argument.
    pub struct ShortOption<'a> {
        name: char,
        on_option: Box<dyn FnMut() -> bool + 'a>,
    }

    impl<'a> ShortOption<'a> {
        pub fn new(name: char, on_option: impl FnMut() -> bool + 'a) -> Self {
            Self {
                name,
                on_option: Box::new(on_option),
            }
        }

        pub fn name(&self) -> char {
            self.name
        }

        /// Run the callback. `false` asks the parser to stop.
        pub fn invoke(&mut self) -> bool {
            (self.on_option)()
        }
    }

    impl fmt::Debug for ShortOption<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("ShortOption")
                .field("name", &self.name)
                .finish_non_exhaustive()
        }
    }

    /// Registry of recognized options.
    ///
    /// Lookups binary-search once the list has been sorted. Adding an option
    /// clears the sorted state; [`OptionList::sort`] restores it.
    #[derive(Debug)]
    pub struct OptionList<'a> {
        options: Vec<ShortOption<'a>>,
        sorted: bool,
    }

    impl Default for OptionList<'_> {
        fn default() -> Self {
            Self {
                options: Vec::new(),
                sorted: true,
            }
        }
    }

    impl<'a> OptionList<'a> {
        /// Create an empty list.
        pub fn new() -> Self {
            Self::default()
        }

        /// Register an option.
        ///
        /// Names must be unique within a list; a repeated name is rejected and
        /// the list is left as it was.
        pub fn add(&mut self, option: ShortOption<'a>) -> OptionResult<()> {
            if self.find(option.name).is_some() {
                return Err(OptionError::DuplicateOption(option.name));
            }
            tracing::trace!(option = %option.name, "registering option");
            self.options.push(option);
            self.sorted = false;
            Ok(())
        }

        /// Builder form of [`OptionList::add`].
        pub fn with(
            mut self,
            name: char,
            on_option: impl FnMut() -> bool + 'a,
        ) -> OptionResult<Self> {
            self.add(ShortOption::new(name, on_option))?;
            Ok(self)
        }

        /// Order options by name. No-op when already sorted.
        pub fn sort(&mut self) {
            if self.sorted {
                return;
            }
            self.options.sort_by_key(|opt| opt.name);
            self.sorted = true;
        }

        pub fn is_sorted(&self) -> bool {
            self.sorted
        }

        /// Look up an option by name.
        pub fn find(&self, name: char) -> Option<&ShortOption<'a>> {
            self.position(name).map(|idx| &self.options[idx])
        }

        /// Look up an option by name for invocation.
        pub fn find_mut(&mut self, name: char) -> Option<&mut ShortOption<'a>> {
            self.position(name).map(move |idx| &mut self.options[idx])
        }

        pub fn len(&self) -> usize {
            self.options.len()
        }

        pub fn is_empty(&self) -> bool {
            self.options.is_empty()
        }

        /// Options in storage order (by name once sorted).
        pub fn iter(&self) -> impl Iterator<Item = &ShortOption<'a>> {
            self.options.iter()
        }

        fn position(&self, name: char) -> Option<usize> {
            if self.sorted {
                self.options.binary_search_by_key(&name, |opt| opt.name).ok()
            } else {
                // Unsorted lists are still searchable, just linearly.
                self.options.iter().position(|opt| opt.name == name)
            }
        }
    }
}

pub mod parse {
    use crate::error::{OptionError, OptionResult};
    use crate::list::OptionList;

    /// Consume leading `-x` arguments, invoking the matching callbacks.
    ///
    /// Only the character right after `-` names the option; the rest of the
    /// token is ignored. A lone `-` names `'\0'`.
    ///
    /// Returns the index of the first unconsumed argument. That is the first
    /// argument not starting with `-`, `args.len()` when every argument was a
    /// flag, or the index of the flag whose callback returned `false`.
    ///
    /// An unregistered flag fails with [`OptionError::InvalidOption`]. Callbacks
    /// for the flags before it have already run.
    pub fn parse_options<S: AsRef<str>>(
        args: &[S],
        options: &mut OptionList<'_>,
    ) -> OptionResult<usize> {
        options.sort();

        let mut cursor = 0;
        while let Some(arg) = args.get(cursor) {
            let Some(rest) = arg.as_ref().strip_prefix('-') else {
                tracing::debug!(cursor, "non-flag argument ends option parsing");
                break;
            };
            let name = rest.chars().next().unwrap_or('\0');
            let Some(opt) = options.find_mut(name) else {
                tracing::debug!(cursor, option = %make_printable(name), "unrecognized option");
                return Err(OptionError::InvalidOption(name));
            };
            tracing::trace!(cursor, option = %make_printable(name), "invoking option");
            if !opt.invoke() {
                tracing::debug!(cursor, option = %make_printable(name), "option stopped parsing");
                break;
            }
            cursor += 1;
        }

        Ok(cursor)
    }

    /// Like [`parse_options`], but returns the unconsumed arguments.
    pub fn remaining_args<'s, S: AsRef<str>>(
        args: &'s [S],
        options: &mut OptionList<'_>,
    ) -> OptionResult<&'s [S]> {
        let cursor = parse_options(args, options)?;
        Ok(&args[cursor..])
    }

    /// Render an option character for display.
    ///
    /// Printable ASCII (space through `~`) is kept as is. Anything else becomes
    /// `\xNN` per UTF-8 byte, two lowercase hex digits each.
    pub fn make_printable(c: char) -> String {
        if c.is_ascii_graphic() || c == ' ' {
            return c.to_string();
        }
        let mut buf = [0; 4];
        c.encode_utf8(&mut buf)
            .bytes()
            .map(|b| format!("\\x{b:02x}"))
            .collect()
    }
}
