//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. The `diesel
//! print-schema` command can regenerate them from a live database.

diesel::table! {
    /// User records.
    ///
    /// The SQL table is named `user` (quoted, since it is a reserved word);
    /// the Rust module is `users` to keep call sites readable.
    #[sql_name = "user"]
    users (id) {
        /// Primary key drawn from the `user_id_seq` sequence.
        id -> Int4,
        /// Given name.
        name -> Text,
        /// Family name; exposed to clients as `lastName`.
        last_name -> Text,
    }
}
