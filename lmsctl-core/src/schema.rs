//! Declarative descriptors for the seven managed tables.
//!
//! Each entity is one `Table` constant: SQL names plus the labels used in the
//! fixed textual output. The generic engine in [`crate::engine`] derives every
//! statement from these descriptors, so adding a table never means
//! re-implementing the five operations.

/// How a column binds and renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Int,
    Text,
    Money,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// SQL column name.
    pub name: &'static str,
    /// Label used when printing a row (`Name: Alice`).
    pub label: &'static str,
    pub kind: ColumnKind,
    /// Whether `update` may rewrite this column.
    pub mutable: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Table {
    /// SQL table name (quoted when statements are built).
    pub name: &'static str,
    pub id_column: &'static str,
    /// Lowercase noun for result lines (`Created user with ID: 3`).
    pub entity: &'static str,
    /// Display name for not-found lines (`User with ID 3 not found.`).
    pub title: &'static str,
    /// Plural noun for the empty-list line (`No users found.`).
    pub plural: &'static str,
    /// Every column except the primary key, in select order.
    pub columns: &'static [Column],
}

impl Table {
    /// Mutable columns with their positions in `columns`.
    pub fn mutable_columns(&self) -> impl Iterator<Item = (usize, &Column)> {
        self.columns.iter().enumerate().filter(|(_, c)| c.mutable)
    }
}

const fn col(name: &'static str, label: &'static str, kind: ColumnKind, mutable: bool) -> Column {
    Column {
        name,
        label,
        kind,
        mutable,
    }
}

pub const USER: Table = Table {
    name: "User",
    id_column: "user_id",
    entity: "user",
    title: "User",
    plural: "users",
    columns: &[
        col("name", "Name", ColumnKind::Text, true),
        col("email", "Email", ColumnKind::Text, true),
        col("role", "Role", ColumnKind::Text, true),
    ],
};

// instructor_id is assigned at creation and never rewritten by update.
pub const COURSE: Table = Table {
    name: "Course",
    id_column: "course_id",
    entity: "course",
    title: "Course",
    plural: "courses",
    columns: &[
        col("title", "Title", ColumnKind::Text, true),
        col("instructor_id", "Instructor ID", ColumnKind::Int, false),
        col("description", "Description", ColumnKind::Text, true),
        col("price", "Price", ColumnKind::Money, true),
    ],
};

pub const CHAPTER: Table = Table {
    name: "Chapter",
    id_column: "chapter_id",
    entity: "chapter",
    title: "Chapter",
    plural: "chapters",
    columns: &[
        col("course_id", "Course ID", ColumnKind::Int, true),
        col("title", "Title", ColumnKind::Text, true),
        col("video_url", "Video URL", ColumnKind::Text, true),
        col("content", "Content", ColumnKind::Text, true),
    ],
};

pub const ENROLLMENT: Table = Table {
    name: "Enrollment",
    id_column: "enrollment_id",
    entity: "enrollment",
    title: "Enrollment",
    plural: "enrollments",
    columns: &[
        col("user_id", "User ID", ColumnKind::Int, true),
        col("course_id", "Course ID", ColumnKind::Int, true),
    ],
};

// Only the amount is mutable; repointing a transaction at another user or
// course is not a supported correction.
pub const TRANSACTION: Table = Table {
    name: "Transaction",
    id_column: "transaction_id",
    entity: "transaction",
    title: "Transaction",
    plural: "transactions",
    columns: &[
        col("user_id", "User ID", ColumnKind::Int, false),
        col("course_id", "Course ID", ColumnKind::Int, false),
        col("amount", "Amount", ColumnKind::Money, true),
    ],
};

pub const FEATURE_STORE: Table = Table {
    name: "Feature_Store",
    id_column: "feature_store_id",
    entity: "feature_store",
    title: "Feature_Store",
    plural: "feature_store entries",
    columns: &[
        col("course_id", "Course ID", ColumnKind::Int, false),
        col("metadata", "Metadata", ColumnKind::Text, true),
        col("version", "Version", ColumnKind::Int, true),
    ],
};

// Append-only: no mutable columns, and the CLI exposes no update verb.
pub const FEATURE_STORE_AUDIT: Table = Table {
    name: "Feature_Store_Audit",
    id_column: "audit_id",
    entity: "feature_store_audit",
    title: "Feature_Store_Audit",
    plural: "feature_store_audit entries",
    columns: &[
        col("feature_store_id", "Feature_Store ID", ColumnKind::Int, false),
        col("change_description", "Change Description", ColumnKind::Text, false),
    ],
};
