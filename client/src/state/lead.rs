#[cfg(test)]
#[path = "lead_test.rs"]
mod lead_test;

/// The five user-editable fields of a lead draft.
///
/// `name()` is the HTML form field name used by the capture form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LeadField {
    BusinessType,
    EmployeesCount,
    FullName,
    Email,
    Phone,
}

impl LeadField {
    /// All fields in the order the form renders them.
    pub const ALL: [LeadField; 5] = [
        LeadField::FullName,
        LeadField::Email,
        LeadField::Phone,
        LeadField::BusinessType,
        LeadField::EmployeesCount,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BusinessType => "businessType",
            Self::EmployeesCount => "employeesCount",
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    /// Resolve a form field name. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// Business categories offered by the capture form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusinessCategory {
    Restaurant,
    LocalShop,
    ProfessionalServices,
    HealthBeauty,
    Other,
}

impl BusinessCategory {
    pub const ALL: [BusinessCategory; 5] = [
        BusinessCategory::Restaurant,
        BusinessCategory::LocalShop,
        BusinessCategory::ProfessionalServices,
        BusinessCategory::HealthBeauty,
        BusinessCategory::Other,
    ];

    /// Value stored in the draft and sent to the store.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurante/Comida",
            Self::LocalShop => "Comercio Local",
            Self::ProfessionalServices => "Servicios Profesionales",
            Self::HealthBeauty => "Salud/Belleza",
            Self::Other => "Otro",
        }
    }

    /// Text shown in the select option.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurante / Comida",
            Self::LocalShop => "Comercio / Tienda",
            Self::ProfessionalServices => "Servicios Profesionales",
            Self::HealthBeauty => "Salud / Belleza",
            Self::Other => "Otro",
        }
    }
}

/// Employee-count brackets offered by the capture form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmployeeBracket {
    Solo,
    TwoToFive,
    SixToTen,
    ElevenPlus,
}

impl EmployeeBracket {
    pub const ALL: [EmployeeBracket; 4] = [
        EmployeeBracket::Solo,
        EmployeeBracket::TwoToFive,
        EmployeeBracket::SixToTen,
        EmployeeBracket::ElevenPlus,
    ];

    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Solo => "1 (Solo yo)",
            Self::TwoToFive => "2-5",
            Self::SixToTen => "6-10",
            Self::ElevenPlus => "11+",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Solo => "1 (Solo yo)",
            Self::TwoToFive => "2 - 5",
            Self::SixToTen => "6 - 10",
            Self::ElevenPlus => "Más de 10",
        }
    }
}

/// In-memory draft of a lead, mutated field by field while the form is open.
///
/// Values are kept as entered; the select fields hold the option value, or an
/// empty string while nothing is selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub business_type: String,
    pub employees_count: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

impl LeadDraft {
    #[must_use]
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::BusinessType => &self.business_type,
            LeadField::EmployeesCount => &self.employees_count,
            LeadField::FullName => &self.full_name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: LeadField, value: String) {
        let slot = match field {
            LeadField::BusinessType => &mut self.business_type,
            LeadField::EmployeesCount => &mut self.employees_count,
            LeadField::FullName => &mut self.full_name,
            LeadField::Email => &mut self.email,
            LeadField::Phone => &mut self.phone,
        };
        *slot = value;
    }

    /// First required field that is still empty, in form order.
    #[must_use]
    pub fn first_missing(&self) -> Option<LeadField> {
        LeadField::ALL.into_iter().find(|field| self.get(*field).is_empty())
    }
}
