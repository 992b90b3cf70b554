/// All primary keys are UUIDv4, generated at insert time.
pub type DbId = uuid::Uuid;
