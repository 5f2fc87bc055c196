use activity_core_db::models::EntityReference;
use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;
use std::str::FromStr;
use uuid::Uuid;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Retrieves a required `HeaplessString` from a row.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let s: String = row.try_get(col_name)?;
    HeaplessString::from_str(&s).map_err(|_| {
        format!("Value for column '{col_name}' is too long (max {N} chars)").into()
    })
}

/// Retrieves an optional `HeaplessString` from a row.
pub fn get_optional_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<Option<HeaplessString<N>>, Box<dyn Error + Send + Sync>> {
    let s: Option<String> = row.try_get(col_name)?;
    s.map(|val| HeaplessString::from_str(&val))
        .transpose()
        .map_err(|_| {
            format!("Value for column '{col_name}' is too long (max {N} chars)").into()
        })
}

/// Retrieves an optional polymorphic reference stored as a `<prefix>_type` / `<prefix>_id` column pair.
pub fn get_optional_reference(
    row: &PgRow,
    prefix: &str,
) -> Result<Option<EntityReference>, Box<dyn Error + Send + Sync>> {
    let entity_type = get_optional_heapless_string(row, &format!("{prefix}_type"))?;
    let entity_id: Option<Uuid> = row.try_get(format!("{prefix}_id").as_str())?;
    match (entity_type, entity_id) {
        (Some(entity_type), Some(entity_id)) => Ok(Some(EntityReference {
            entity_type,
            entity_id,
        })),
        (None, None) => Ok(None),
        _ => Err(format!("Incomplete reference in columns '{prefix}_type'/'{prefix}_id'").into()),
    }
}
