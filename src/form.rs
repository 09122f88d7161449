//! Quote-request form: schema, field record and advance gates.
//!
//! The schema is fixed at compile time. [`FormFields`] is created from it
//! with one empty entry per field; its keys never change afterwards.

/// Input kind of a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Number,
    Select { options: Vec<SelectOption> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl FieldKind {
    fn select(options: &[(&'static str, &'static str)]) -> Self {
        FieldKind::Select {
            options: options
                .iter()
                .map(|&(value, label)| SelectOption { value, label })
                .collect(),
        }
    }

    /// Whether a typed character is acceptable for this kind.
    ///
    /// Select fields accept no typed input; they cycle through options.
    pub fn accepts(&self, ch: char) -> bool {
        match self {
            FieldKind::Text | FieldKind::Email => !ch.is_control(),
            FieldKind::Phone => ch.is_ascii_digit() || matches!(ch, '+' | ' '),
            FieldKind::Number => ch.is_ascii_digit() || ch == '.',
            FieldKind::Select { .. } => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

impl FieldSpec {
    fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            placeholder: None,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }

    /// Display label for a stored value: the option label for selects,
    /// the raw value otherwise.
    pub fn display_value<'a>(&self, value: &'a str) -> &'a str {
        if let FieldKind::Select { options } = &self.kind {
            if let Some(option) = options.iter().find(|o| o.value == value) {
                return option.label;
            }
        }
        value
    }

    /// Next (or previous) select option after `current`. `None` for
    /// non-select fields.
    pub fn cycle_option(&self, current: &str, forward: bool) -> Option<&'static str> {
        let FieldKind::Select { options } = &self.kind else {
            return None;
        };
        if options.is_empty() {
            return None;
        }
        let next = match options.iter().position(|o| o.value == current) {
            None if forward => 0,
            None => options.len() - 1,
            Some(i) if forward => (i + 1) % options.len(),
            Some(i) => (i + options.len() - 1) % options.len(),
        };
        Some(options[next].value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSpec {
    pub title: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl StepSpec {
    pub fn new(title: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self { title, fields }
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }
}

/// Ordered, non-empty list of wizard steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    steps: Vec<StepSpec>,
}

impl Default for FormSchema {
    fn default() -> Self {
        Self::cotizador()
    }
}

impl FormSchema {
    /// Build a schema. Returns `None` for an empty step list.
    pub fn new(steps: Vec<StepSpec>) -> Option<Self> {
        if steps.is_empty() {
            return None;
        }
        Some(Self { steps })
    }

    /// The three-step quote form of the landing page.
    pub fn cotizador() -> Self {
        let personal = StepSpec::new(
            "Datos Personales",
            vec![
                FieldSpec::new("nombreCompleto", "Nombre completo", FieldKind::Text).required(),
                FieldSpec::new("rut", "RUT", FieldKind::Text).required(),
                FieldSpec::new("correo", "Correo", FieldKind::Email).required(),
                FieldSpec::new("celular", "Celular", FieldKind::Phone).required(),
            ],
        );
        let quote = StepSpec::new(
            "Cotizar Isapre",
            vec![
                FieldSpec::new(
                    "previsionActual",
                    "Previsión actual",
                    FieldKind::select(&[
                        ("fonasa", "Fonasa"),
                        ("isapre_vida_tres", "Isapre Vida Tres"),
                        ("isapre_consalud", "Isapre Consalud"),
                        ("isapre_cruz_blanca", "Isapre Cruz Blanca"),
                    ]),
                )
                .required(),
                FieldSpec::new("ufActual", "UF que paga actualmente", FieldKind::Number)
                    .placeholder("Ej: 8"),
                FieldSpec::new(
                    "regionResidencia",
                    "Región de Residencia",
                    FieldKind::select(&[
                        ("rm", "Región Metropolitana"),
                        ("valparaiso", "Valparaíso"),
                        ("biobio", "Biobío"),
                    ]),
                )
                .required(),
                FieldSpec::new(
                    "cargas",
                    "Cargas Médicas / Legales",
                    FieldKind::select(&[
                        ("0", "Sin cargas"),
                        ("1", "1"),
                        ("2", "2"),
                        ("3", "3"),
                        ("4", "4"),
                        ("5+", "5 o más"),
                    ]),
                )
                .required(),
                FieldSpec::new("edadCargas", "Edad de las cargas", FieldKind::Text),
                FieldSpec::new("rentaImponible", "Renta imponible", FieldKind::Number)
                    .required()
                    .placeholder("Ej: 3000000"),
            ],
        );
        let confirm = StepSpec::new("Enviar Formulario", Vec::new());

        Self {
            steps: vec![personal, quote, confirm],
        }
    }

    /// Number of steps (always >= 1).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Step by 1-based index.
    pub fn step(&self, step: usize) -> Option<&StepSpec> {
        step.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    pub fn steps(&self) -> &[StepSpec] {
        &self.steps
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.steps
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| f.name == name)
    }
}

/// Field name → value record shared by all steps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    entries: Vec<(&'static str, String)>,
}

impl FormFields {
    /// One empty entry per schema field, in schema order. Names repeated
    /// across steps share a single entry.
    pub fn empty_for(schema: &FormSchema) -> Self {
        let mut entries: Vec<(&'static str, String)> = Vec::new();
        for field in schema.steps.iter().flat_map(|s| s.fields.iter()) {
            if !entries.iter().any(|(name, _)| *name == field.name) {
                entries.push((field.name, String::new()));
            }
        }
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an existing field. Unknown names are ignored and return false.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).map_or(true, |v| v.trim().is_empty())
    }

    pub fn is_all_empty(&self) -> bool {
        self.entries.iter().all(|(_, v)| v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(n, v)| (*n, v.as_str()))
    }
}

/// Decides whether the wizard may leave `step` (1-based) going forward.
pub trait AdvanceGate {
    fn can_advance(&self, step: usize, fields: &FormFields) -> bool;
}

/// Every required field of the step must be non-blank.
impl AdvanceGate for FormSchema {
    fn can_advance(&self, step: usize, fields: &FormFields) -> bool {
        self.step(step)
            .map_or(false, |s| s.required_fields().all(|f| !fields.is_blank(f.name)))
    }
}

impl<F> AdvanceGate for F
where
    F: Fn(usize, &FormFields) -> bool,
{
    fn can_advance(&self, step: usize, fields: &FormFields) -> bool {
        self(step, fields)
    }
}

/// Advancing is never blocked.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ungated;

impl AdvanceGate for Ungated {
    fn can_advance(&self, _step: usize, _fields: &FormFields) -> bool {
        true
    }
}
