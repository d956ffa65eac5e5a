use crate::*;

fn check_text(field: &str, value: &str, max_len: usize) -> Result<(), BlindBoxError> {
    if value.is_empty() || value.len() > max_len {
        return Err(BlindBoxError::Configuration(format!(
            "{} must be 1-{} bytes",
            field, max_len
        )));
    }
    Ok(())
}

pub(crate) fn validate_config(config: &CollectionConfig) -> Result<(), BlindBoxError> {
    if config.unit_price.0 == 0 {
        return Err(BlindBoxError::Configuration(
            "Unit price must be positive".into(),
        ));
    }
    if config.supply_cap == 0 || config.supply_cap > MAX_SUPPLY_CAP {
        return Err(BlindBoxError::Configuration(format!(
            "Supply cap must be 1-{}",
            MAX_SUPPLY_CAP
        )));
    }
    if config.per_buyer_cap == 0 {
        return Err(BlindBoxError::Configuration(
            "Per-buyer cap must be positive".into(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_metadata(metadata: &CollectionMetadata) -> Result<(), BlindBoxError> {
    check_text("Name", &metadata.name, MAX_NAME_LEN)?;
    check_text("Symbol", &metadata.symbol, MAX_NAME_LEN)?;
    check_text("Unrevealed URI", &metadata.unrevealed_uri, MAX_URI_LEN)?;
    if let Some(icon) = &metadata.icon {
        if icon.len() > MAX_URI_LEN {
            return Err(BlindBoxError::Configuration(format!(
                "Icon must be at most {} bytes",
                MAX_URI_LEN
            )));
        }
    }
    Ok(())
}

pub(crate) fn validate_revealed_base(base_uri: &str) -> Result<(), BlindBoxError> {
    if base_uri.is_empty() || base_uri.len() > MAX_URI_LEN {
        return Err(BlindBoxError::InvalidInput(format!(
            "Revealed base URI must be 1-{} bytes",
            MAX_URI_LEN
        )));
    }
    Ok(())
}
