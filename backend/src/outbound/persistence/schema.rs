//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the externally managed migrations exactly;
//! Diesel uses them for compile-time query validation and type-safe SQL
//! generation.

diesel::table! {
    /// User records.
    ///
    /// `name` carries a unique constraint; violating it is reported as a
    /// recoverable conflict, not a fatal error.
    users (id) {
        /// Primary key, assigned by the database sequence.
        id -> Int8,
        /// Unique display name.
        name -> Varchar,
        /// Free-form text, NULL when never supplied.
        other -> Nullable<Text>,
        /// Record creation timestamp, set at insert.
        created_at -> Timestamptz,
        /// Last modification timestamp, NULL until the first update.
        updated_at -> Nullable<Timestamptz>,
    }
}
