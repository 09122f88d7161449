/// Page sections reachable from the menu, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Cotizador,
    Isapres,
    Agenda,
    Noticias,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Cotizador,
        Section::Isapres,
        Section::Agenda,
        Section::Noticias,
    ];

    pub fn menu_label(self) -> &'static str {
        match self {
            Section::Cotizador => "INICIO",
            Section::Isapres => "ISAPRES",
            Section::Agenda => "SERVICIOS",
            Section::Noticias => "NOTICIAS",
        }
    }

    /// In-page anchor of the section.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Cotizador => "#inicio",
            Section::Isapres => "#isapres",
            Section::Agenda => "#servicios",
            Section::Noticias => "#noticias",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn is_carousel(self) -> bool {
        matches!(self, Section::Isapres | Section::Noticias)
    }
}
