//! Citation formatting for arXiv papers.
//!
//! A [`CitationFormatter`] turns a [`PaperRecord`] into a [`CitationSet`]: one ready-to-paste
//! string per citation [`Style`]. Two knobs control the output:
//! - [`InitialsStyle`] decides how given names are abbreviated in the styles that use initials
//!   ("J. R. R. Tolkien" or "J.R.R. Tolkien")
//! - [`StyleSet`] decides which styles are produced: the modern set (BibTeX, IEEE, APA) or the
//!   legacy set (BibTeX, short IEEE, PubMed)
//!
//! Formatting is a pure function of the record and the configuration.
//!
//! # Examples
//!
//! ```
//! use citer::{format::CitationFormatter, PaperRecord, Style};
//!
//! let paper = PaperRecord::new(
//!   "2301.00001",
//!   "Example Paper",
//!   vec!["Alice Smith".into(), "Bob Jones".into()],
//!   2023,
//!   "https://arxiv.org/pdf/2301.00001",
//! );
//!
//! let citations = CitationFormatter::default().citations(&paper);
//! assert_eq!(
//!   citations.get(Style::Apa),
//!   Some("A. Smith, & B. Jones (2023). Example Paper. arXiv:2301.00001. https://arxiv.org/pdf/2301.00001")
//! );
//! ```

use super::*;

/// A named citation format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
  /// A BibTeX `@article` entry
  Bibtex,
  /// IEEE reference style
  Ieee,
  /// APA reference style
  Apa,
  /// PubMed/NLM-like reference style, only part of the legacy set
  Pubmed,
}

impl Style {
  /// The lowercase key used in templates, JSON output and on the command line.
  pub fn key(&self) -> &'static str {
    match self {
      Style::Bibtex => "bibtex",
      Style::Ieee => "ieee",
      Style::Apa => "apa",
      Style::Pubmed => "pubmed",
    }
  }

  /// Human-readable name for headings.
  pub fn label(&self) -> &'static str {
    match self {
      Style::Bibtex => "BibTeX",
      Style::Ieee => "IEEE",
      Style::Apa => "APA",
      Style::Pubmed => "PubMed",
    }
  }
}

impl fmt::Display for Style {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.key()) }
}

impl FromStr for Style {
  type Err = CiterError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match &s.to_lowercase() as &str {
      "bibtex" => Ok(Style::Bibtex),
      "ieee" => Ok(Style::Ieee),
      "apa" => Ok(Style::Apa),
      "pubmed" => Ok(Style::Pubmed),
      s => Err(CiterError::InvalidOption(s.to_owned())),
    }
  }
}

/// How given names are reduced to initials.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialsStyle {
  /// Initials separated by spaces: "J. R. R. Tolkien"
  #[default]
  Spaced,
  /// Initials run together: "J.R.R. Tolkien"
  Compact,
}

impl InitialsStyle {
  /// Abbreviates every part of `name` but the last to its first letter and a period.
  ///
  /// Single-word names are returned unchanged.
  ///
  /// ```
  /// use citer::InitialsStyle;
  ///
  /// assert_eq!(InitialsStyle::Spaced.abbreviate("John Ronald Reuel Tolkien"), "J. R. R. Tolkien");
  /// assert_eq!(InitialsStyle::Compact.abbreviate("John Ronald Reuel Tolkien"), "J.R.R. Tolkien");
  /// assert_eq!(InitialsStyle::Spaced.abbreviate("Plato"), "Plato");
  /// ```
  pub fn abbreviate(&self, name: &str) -> String {
    let parts = name.split_whitespace().collect::<Vec<_>>();
    let Some((last, given)) = parts.split_last() else {
      return name.to_string();
    };
    if given.is_empty() {
      return (*last).to_string();
    }

    let initials = given
      .iter()
      .filter_map(|part| part.chars().next())
      .map(|initial| format!("{initial}."))
      .collect::<Vec<_>>()
      .join(self.separator());

    format!("{initials} {last}")
  }

  /// The string placed between consecutive initials.
  fn separator(&self) -> &'static str {
    match self {
      InitialsStyle::Spaced => " ",
      InitialsStyle::Compact => "",
    }
  }
}

impl fmt::Display for InitialsStyle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      InitialsStyle::Spaced => write!(f, "spaced"),
      InitialsStyle::Compact => write!(f, "compact"),
    }
  }
}

impl FromStr for InitialsStyle {
  type Err = CiterError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match &s.to_lowercase() as &str {
      "spaced" => Ok(InitialsStyle::Spaced),
      "compact" => Ok(InitialsStyle::Compact),
      s => Err(CiterError::InvalidOption(s.to_owned())),
    }
  }
}

/// Which group of citation styles a formatter produces.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleSet {
  /// BibTeX, IEEE with full author list and APA
  #[default]
  Modern,
  /// BibTeX, IEEE with only the first author and PubMed
  Legacy,
}

impl StyleSet {
  /// The styles in this set, in display order.
  pub fn styles(&self) -> &'static [Style] {
    match self {
      StyleSet::Modern => &[Style::Bibtex, Style::Ieee, Style::Apa],
      StyleSet::Legacy => &[Style::Bibtex, Style::Ieee, Style::Pubmed],
    }
  }
}

/// Formatted citations for one paper, keyed by style.
///
/// Iteration follows [`Style`]'s declaration order, so output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CitationSet(BTreeMap<Style, String>);

impl CitationSet {
  /// The citation for `style`, if the set contains it.
  pub fn get(&self, style: Style) -> Option<&str> { self.0.get(&style).map(String::as_str) }

  /// Whether the set contains a citation for `style`.
  pub fn contains(&self, style: Style) -> bool { self.0.contains_key(&style) }

  /// All styles present in the set.
  pub fn styles(&self) -> impl Iterator<Item = Style> + '_ { self.0.keys().copied() }

  /// Iterates over `(style, citation)` pairs.
  pub fn iter(&self) -> impl Iterator<Item = (Style, &str)> {
    self.0.iter().map(|(style, citation)| (*style, citation.as_str()))
  }

  /// Number of citations in the set.
  pub fn len(&self) -> usize { self.0.len() }

  /// Whether the set is empty.
  pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

/// How an individual author name is rendered inside a citation.
#[derive(Debug, Clone, Copy)]
enum NamePolicy {
  /// The name exactly as arXiv reports it
  FullName,
  /// Given names reduced to initials, surname kept
  Initials,
}

/// Renders [`PaperRecord`]s into citation strings.
///
/// # Examples
///
/// ```
/// use citer::{CitationFormatter, InitialsStyle, PaperRecord, Style, StyleSet};
///
/// let paper = PaperRecord::new(
///   "2301.00001",
///   "Example Paper",
///   vec!["John Ronald Reuel Tolkien".into()],
///   2023,
///   "https://arxiv.org/pdf/2301.00001",
/// );
///
/// let formatter = CitationFormatter::new(InitialsStyle::Compact, StyleSet::Modern);
/// assert_eq!(
///   formatter.cite(Style::Ieee, &paper),
///   "J.R.R. Tolkien, \"Example Paper,\" 2023, arXiv:2301.00001."
/// );
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CitationFormatter {
  /// Abbreviation rule for styles that use initials
  initials: InitialsStyle,
  /// Which styles [`CitationFormatter::citations`] produces
  styles:   StyleSet,
}

impl CitationFormatter {
  /// Creates a formatter with the given initials rule and style set.
  pub fn new(initials: InitialsStyle, styles: StyleSet) -> Self { Self { initials, styles } }

  /// Formats an optional record, passing absence straight through.
  ///
  /// Returns `None` only when `record` is `None`.
  pub fn format(&self, record: Option<&PaperRecord>) -> Option<CitationSet> {
    record.map(|record| self.citations(record))
  }

  /// Produces every citation of the configured [`StyleSet`] for `record`.
  pub fn citations(&self, record: &PaperRecord) -> CitationSet {
    let citations = self
      .styles
      .styles()
      .iter()
      .map(|style| (*style, self.cite(*style, record)))
      .collect::<BTreeMap<_, _>>();
    trace!("Formatted {} citations for {}", citations.len(), record.identifier);
    CitationSet(citations)
  }

  /// Produces a single citation in `style`.
  ///
  /// [`Style::Ieee`] follows the configured [`StyleSet`]: the modern set lists every author
  /// with initials, the legacy set only the first author followed by "et al.".
  pub fn cite(&self, style: Style, record: &PaperRecord) -> String {
    let PaperRecord { identifier: id, title, year, pdf_url, .. } = record;
    match style {
      Style::Bibtex => format!(
        "@article{{arxiv:{id},\n  author  = {{{authors}}},\n  title   = {{{title}}},\n  journal \
         = {{arXiv preprint arXiv:{id}}},\n  year    = {{{year}}},\n  url     = {{{pdf_url}}}\n}}",
        authors = self.join(&record.authors, NamePolicy::FullName, " and ", " and "),
      ),
      Style::Ieee => match self.styles {
        StyleSet::Modern => format!(
          "{authors}, \"{title},\" {year}, arXiv:{id}.",
          authors = self.join(&record.authors, NamePolicy::Initials, ", ", ", and "),
        ),
        StyleSet::Legacy => format!(
          "{authors}, \"{title},\" arXiv preprint arXiv:{id}, {year}. [Online]. Available: \
           {pdf_url}",
          authors = first_author_et_al(record),
        ),
      },
      Style::Apa => format!(
        "{authors} ({year}). {title}. arXiv:{id}. {pdf_url}",
        authors = self.join(&record.authors, NamePolicy::Initials, ", ", ", & "),
      ),
      Style::Pubmed => format!(
        "{authors}. {title}. arXiv; {year}. Available from: {pdf_url}",
        authors = self.join(&record.authors, NamePolicy::FullName, ", ", ", "),
      ),
    }
  }

  /// Renders one name under `policy`.
  fn name(&self, name: &str, policy: NamePolicy) -> String {
    match policy {
      NamePolicy::FullName => name.to_string(),
      NamePolicy::Initials => self.initials.abbreviate(name),
    }
  }

  /// Joins author names: `separator` between all but the last, `last_connector` before the
  /// last. A single author is rendered alone, with no connector at all.
  fn join(
    &self,
    authors: &[String],
    policy: NamePolicy,
    separator: &str,
    last_connector: &str,
  ) -> String {
    let Some((last, rest)) = authors.split_last() else {
      return String::new();
    };
    let last = self.name(last, policy);
    if rest.is_empty() {
      return last;
    }

    let rest = rest.iter().map(|author| self.name(author, policy)).collect::<Vec<_>>();
    format!("{}{last_connector}{last}", rest.join(separator))
  }
}

/// The first author, followed by "et al." when there are others.
fn first_author_et_al(record: &PaperRecord) -> String {
  match record.first_author() {
    None => String::new(),
    Some(first) if record.has_multiple_authors() => format!("{first} et al."),
    Some(first) => first.to_string(),
  }
}
