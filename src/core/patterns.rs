//! Recognized translation functions and where their arguments live.
//!
//! Positions are 1-based call-argument indices. A pattern with two string
//! positions describes a plural call (`ngettext(singular, plural, n)`).

/// Argument layout of one translation function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    /// Position of the context (`msgctxt`) argument.
    pub context: Option<usize>,
    /// Positions of the singular and optional plural arguments.
    pub strings: &'static [usize],
}

impl Pattern {
    pub const fn new(strings: &'static [usize]) -> Self {
        Self {
            context: None,
            strings,
        }
    }

    pub const fn with_context(context: usize, strings: &'static [usize]) -> Self {
        Self {
            context: Some(context),
            strings,
        }
    }

    /// Highest argument position the call must provide.
    pub fn highest_position(&self) -> usize {
        self.strings
            .iter()
            .copied()
            .chain(self.context)
            .max()
            .unwrap_or(0)
    }
}

/// Immutable name → pattern table for one language.
#[derive(Debug)]
pub struct PatternTable {
    entries: &'static [(&'static str, Pattern)],
}

impl PatternTable {
    pub const fn new(entries: &'static [(&'static str, Pattern)]) -> Self {
        Self { entries }
    }

    /// Exact, case-sensitive lookup of a function name.
    pub fn lookup(&self, name: &str) -> Option<&Pattern> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, pattern)| pattern)
    }
}

/// gettext and GLib functions recognized in C sources.
pub static C_PATTERNS: PatternTable = PatternTable::new(&[
    // GLib
    ("g_dcgettext", Pattern::new(&[2])),
    ("g_dngettext", Pattern::new(&[2, 3])),
    ("g_dpgettext2", Pattern::with_context(2, &[3])),
    ("C_", Pattern::with_context(1, &[2])),
    ("N_", Pattern::new(&[1])),
    // libintl
    ("_", Pattern::new(&[1])),
    ("gettext", Pattern::new(&[1])),
    ("gettext_noop", Pattern::new(&[1])),
    ("dgettext", Pattern::new(&[2])),
    ("dcgettext", Pattern::new(&[2])),
    ("ngettext", Pattern::new(&[1, 2])),
    ("dngettext", Pattern::new(&[2, 3])),
    ("dcngettext", Pattern::new(&[2, 3])),
    ("pgettext", Pattern::with_context(1, &[2])),
    ("dpgettext", Pattern::with_context(2, &[3])),
    ("dcpgettext", Pattern::with_context(2, &[3])),
    ("npgettext", Pattern::with_context(1, &[2, 3])),
    ("dnpgettext", Pattern::with_context(2, &[3, 4])),
    ("dcnpgettext", Pattern::with_context(2, &[3, 4])),
]);

/// gettext and GJS functions recognized in JavaScript sources.
///
/// Member-access calls (`Gettext.dgettext(...)`) resolve by property name.
pub static JAVASCRIPT_PATTERNS: PatternTable = PatternTable::new(&[
    // GJS
    ("C_", Pattern::with_context(1, &[2])),
    ("N_", Pattern::new(&[1])),
    ("NC_", Pattern::with_context(1, &[2])),
    // Gettext module
    ("gettext", Pattern::new(&[1])),
    ("_", Pattern::new(&[1])),
    ("dgettext", Pattern::new(&[2])),
    ("dcgettext", Pattern::new(&[2])),
    ("ngettext", Pattern::new(&[1, 2])),
    ("dngettext", Pattern::new(&[2, 3])),
    ("pgettext", Pattern::with_context(1, &[2])),
    ("dpgettext", Pattern::with_context(2, &[3])),
]);
