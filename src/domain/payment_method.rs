/// Gateway integrations a payment can go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentMethodKind {
    /// Paga e-payment gateway
    Paga,
    #[allow(dead_code)]
    Check,
    #[allow(dead_code)]
    CreditCard,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
    pub kind: PaymentMethodKind,
    /// Deployment environment the method is configured for, e.g. "production".
    #[allow(dead_code)]
    pub environment: String,
    #[allow(dead_code)]
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct PaymentMethodCreate {
    pub name: String,
    pub kind: PaymentMethodKind,
    pub environment: String,
}

#[derive(Debug, Clone, Default)]
pub struct PaymentMethodPatch {
    pub name: Option<String>,
    pub active: Option<bool>,
}

impl PaymentMethod {
    pub fn is_paga(&self) -> bool {
        self.kind == PaymentMethodKind::Paga
    }
}

impl PaymentMethodCreate {
    pub fn new(name: impl Into<String>, kind: PaymentMethodKind, environment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            environment: environment.into(),
        }
    }

    pub fn paga(name: impl Into<String>, environment: impl Into<String>) -> Self {
        Self::new(name, PaymentMethodKind::Paga, environment)
    }
}
