use crate::domain::{error::DomainError, structure::ProjectStructure, value_objects::BlockName};

/// Centralized domain validation.
///
/// Services call through here instead of reaching into entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_block_name(raw: &str) -> Result<BlockName, DomainError> {
        BlockName::parse(raw)
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
