//! Header and footer bindings
//!
//! A worksheet has a single `<headerFooter>` node holding six strings (odd,
//! even and first-page variants of header and footer). [`HeaderFooter`] and
//! [`HeaderFooterMut`] are thin views that pick one of those strings; they
//! hold no state of their own.
//!
//! The strings use Excel's control codes. `&L`, `&C` and `&R` start the left,
//! center and right sections; text before any section code belongs to the
//! center section. `&&` is a literal ampersand.

/// The `<headerFooter>` node
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderFooterNode {
    pub odd_header: Option<String>,
    pub odd_footer: Option<String>,
    pub even_header: Option<String>,
    pub even_footer: Option<String>,
    pub first_header: Option<String>,
    pub first_footer: Option<String>,
    /// Even pages use their own header/footer
    pub different_odd_even: bool,
    /// The first page uses its own header/footer
    pub different_first: bool,
}

impl HeaderFooterNode {
    /// The string for one kind
    pub fn slot(&self, kind: HeaderFooterKind) -> &Option<String> {
        match kind {
            HeaderFooterKind::OddHeader => &self.odd_header,
            HeaderFooterKind::OddFooter => &self.odd_footer,
            HeaderFooterKind::EvenHeader => &self.even_header,
            HeaderFooterKind::EvenFooter => &self.even_footer,
            HeaderFooterKind::FirstHeader => &self.first_header,
            HeaderFooterKind::FirstFooter => &self.first_footer,
        }
    }

    /// Mutable access to the string for one kind
    pub fn slot_mut(&mut self, kind: HeaderFooterKind) -> &mut Option<String> {
        match kind {
            HeaderFooterKind::OddHeader => &mut self.odd_header,
            HeaderFooterKind::OddFooter => &mut self.odd_footer,
            HeaderFooterKind::EvenHeader => &mut self.even_header,
            HeaderFooterKind::EvenFooter => &mut self.even_footer,
            HeaderFooterKind::FirstHeader => &mut self.first_header,
            HeaderFooterKind::FirstFooter => &mut self.first_footer,
        }
    }
}

/// Which of the six header/footer strings a view is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderFooterKind {
    OddHeader,
    OddFooter,
    EvenHeader,
    EvenFooter,
    FirstHeader,
    FirstFooter,
}

impl HeaderFooterKind {
    /// All six kinds
    pub const ALL: [HeaderFooterKind; 6] = [
        HeaderFooterKind::OddHeader,
        HeaderFooterKind::OddFooter,
        HeaderFooterKind::EvenHeader,
        HeaderFooterKind::EvenFooter,
        HeaderFooterKind::FirstHeader,
        HeaderFooterKind::FirstFooter,
    ];

    /// Element name inside `<headerFooter>`
    pub fn element_name(self) -> &'static str {
        match self {
            HeaderFooterKind::OddHeader => "oddHeader",
            HeaderFooterKind::OddFooter => "oddFooter",
            HeaderFooterKind::EvenHeader => "evenHeader",
            HeaderFooterKind::EvenFooter => "evenFooter",
            HeaderFooterKind::FirstHeader => "firstHeader",
            HeaderFooterKind::FirstFooter => "firstFooter",
        }
    }

    /// Look up a kind by element name
    pub fn from_element_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.element_name() == name)
    }

    /// Whether this is a header (as opposed to a footer)
    pub fn is_header(self) -> bool {
        matches!(
            self,
            HeaderFooterKind::OddHeader
                | HeaderFooterKind::EvenHeader
                | HeaderFooterKind::FirstHeader
        )
    }
}

/// The three sections of a header or footer string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub left: String,
    pub center: String,
    pub right: String,
}

impl Sections {
    /// Split a header/footer string into its sections
    pub fn parse(text: &str) -> Self {
        let mut sections = Sections::default();
        let mut current = &mut sections.center;
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '&' {
                current.push(c);
                continue;
            }
            match chars.peek().copied() {
                Some('L') => {
                    chars.next();
                    current = &mut sections.left;
                }
                Some('C') => {
                    chars.next();
                    current = &mut sections.center;
                }
                Some('R') => {
                    chars.next();
                    current = &mut sections.right;
                }
                Some('&') => {
                    chars.next();
                    current.push_str("&&");
                }
                _ => current.push('&'),
            }
        }

        sections
    }

    /// Join sections back into a header/footer string
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for (code, part) in [("&L", &self.left), ("&C", &self.center), ("&R", &self.right)] {
            if !part.is_empty() {
                text.push_str(code);
                text.push_str(part);
            }
        }
        text
    }
}

/// Read-only view of one header or footer
#[derive(Debug, Clone, Copy)]
pub struct HeaderFooter<'a> {
    node: Option<&'a HeaderFooterNode>,
    kind: HeaderFooterKind,
}

impl<'a> HeaderFooter<'a> {
    pub(crate) fn new(node: Option<&'a HeaderFooterNode>, kind: HeaderFooterKind) -> Self {
        Self { node, kind }
    }

    /// Which string this view is bound to
    pub fn kind(&self) -> HeaderFooterKind {
        self.kind
    }

    /// Raw header/footer string (empty if unset)
    pub fn text(&self) -> &'a str {
        self.node
            .and_then(|n| n.slot(self.kind).as_deref())
            .unwrap_or("")
    }

    /// Parsed sections
    pub fn sections(&self) -> Sections {
        Sections::parse(self.text())
    }

    /// Left section
    pub fn left(&self) -> String {
        self.sections().left
    }

    /// Center section
    pub fn center(&self) -> String {
        self.sections().center
    }

    /// Right section
    pub fn right(&self) -> String {
        self.sections().right
    }
}

/// Mutable view of one header or footer
#[derive(Debug)]
pub struct HeaderFooterMut<'a> {
    node: &'a mut HeaderFooterNode,
    kind: HeaderFooterKind,
}

impl<'a> HeaderFooterMut<'a> {
    pub(crate) fn new(node: &'a mut HeaderFooterNode, kind: HeaderFooterKind) -> Self {
        Self { node, kind }
    }

    /// Which string this view is bound to
    pub fn kind(&self) -> HeaderFooterKind {
        self.kind
    }

    /// Raw header/footer string (empty if unset)
    pub fn text(&self) -> &str {
        self.node.slot(self.kind).as_deref().unwrap_or("")
    }

    /// Replace the raw string; an empty string unsets it
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        let text = text.into();
        *self.node.slot_mut(self.kind) = if text.is_empty() { None } else { Some(text) };
    }

    /// Set the left section, keeping the other two
    pub fn set_left<S: Into<String>>(&mut self, text: S) {
        self.update_sections(|s| s.left = text.into());
    }

    /// Set the center section, keeping the other two
    pub fn set_center<S: Into<String>>(&mut self, text: S) {
        self.update_sections(|s| s.center = text.into());
    }

    /// Set the right section, keeping the other two
    pub fn set_right<S: Into<String>>(&mut self, text: S) {
        self.update_sections(|s| s.right = text.into());
    }

    fn update_sections<F: FnOnce(&mut Sections)>(&mut self, f: F) {
        let mut sections = Sections::parse(self.text());
        f(&mut sections);
        self.set_text(sections.to_text());
    }

    /// Read-only view of the same string
    pub fn as_view(&self) -> HeaderFooter<'_> {
        HeaderFooter::new(Some(&*self.node), self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sections() {
        let s = Sections::parse("&LLeft text&CPage &P&RRight");
        assert_eq!(s.left, "Left text");
        assert_eq!(s.center, "Page &P");
        assert_eq!(s.right, "Right");
    }

    #[test]
    fn test_uncoded_text_is_center() {
        let s = Sections::parse("Quarterly report");
        assert_eq!(s.center, "Quarterly report");
        assert!(s.left.is_empty());
        assert!(s.right.is_empty());
    }

    #[test]
    fn test_escaped_ampersand() {
        let s = Sections::parse("&LR&&D");
        assert_eq!(s.left, "R&&D");
        assert_eq!(s.to_text(), "&LR&&D");
    }

    #[test]
    fn test_views_share_one_node() {
        let mut node = HeaderFooterNode::default();

        HeaderFooterMut::new(&mut node, HeaderFooterKind::OddHeader).set_center("Title");
        HeaderFooterMut::new(&mut node, HeaderFooterKind::OddHeader).set_right("&D");
        HeaderFooterMut::new(&mut node, HeaderFooterKind::EvenFooter).set_text("&CPage &P");

        let odd = HeaderFooter::new(Some(&node), HeaderFooterKind::OddHeader);
        assert_eq!(odd.text(), "&CTitle&R&D");
        assert_eq!(odd.center(), "Title");
        assert_eq!(odd.right(), "&D");

        let even = HeaderFooter::new(Some(&node), HeaderFooterKind::EvenFooter);
        assert_eq!(even.center(), "Page &P");
        assert!(node.odd_footer.is_none());
    }

    #[test]
    fn test_missing_node_reads_empty() {
        let view = HeaderFooter::new(None, HeaderFooterKind::FirstFooter);
        assert_eq!(view.text(), "");
        assert_eq!(view.sections(), Sections::default());
    }

    #[test]
    fn test_kind_names() {
        for kind in HeaderFooterKind::ALL {
            assert_eq!(HeaderFooterKind::from_element_name(kind.element_name()), Some(kind));
        }
        assert!(HeaderFooterKind::FirstHeader.is_header());
        assert!(!HeaderFooterKind::OddFooter.is_header());
    }
}
