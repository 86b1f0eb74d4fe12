use sea_orm::EntityTrait;

use crate::schema::FieldSpec;

/// An entity exposed through the generic CRUD surface.
pub trait Resource: EntityTrait {
    /// Singular wire name; keys the record in update responses.
    const NAME: &'static str;
    /// Writable fields, in declaration order.
    const SCHEMA: &'static [FieldSpec];
}
