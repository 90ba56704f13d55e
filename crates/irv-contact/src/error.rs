#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("unknown field `{0}`")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Names of the fields rejected by validation, in form order.
    pub fn invalid_fields(&self) -> Vec<crate::Field> {
        let Self::Validate(errors) = self else {
            return vec![];
        };

        let fields = errors.field_errors();

        <crate::Field as strum::VariantArray>::VARIANTS
            .iter()
            .filter(|field| fields.contains_key(field.as_ref()))
            .copied()
            .collect()
    }
}
