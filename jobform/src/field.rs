//! Field identifiers and the declared evaluation order.

/// One logical input unit of the job-application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    Email,
    Phone,
    Position,
    Skills,
    CoverLetter,
}

impl FieldId {
    /// The fixed order in which fields are evaluated on submit.
    ///
    /// First-invalid computation depends on this order: reordering changes
    /// which control receives focus after a failed submit.
    pub const EVALUATION_ORDER: [FieldId; 6] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Position,
        FieldId::Skills,
        FieldId::CoverLetter,
    ];
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldId::FullName => "full_name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Position => "position",
            FieldId::Skills => "skills",
            FieldId::CoverLetter => "cover_letter",
        };
        f.write_str(name)
    }
}
