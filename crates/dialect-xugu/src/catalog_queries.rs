//! Catalog queries against the Xugu system tables. Table-name inputs
//! are always bound as parameters, uppercased by the caller to match
//! the case the catalog stores.

pub(crate) const TABLE_NAMES_QUERY: &str = "SELECT TABLE_NAME FROM USER_TABLES ORDER BY TABLE_NAME";

pub(crate) const VIEW_NAMES_QUERY: &str =
    "SELECT VIEW_NAME, DEFINE FROM USER_VIEWS ORDER BY VIEW_NAME";

pub(crate) const TABLE_COLUMNS_QUERY: &str = r#"
SELECT
  c.COL_NAME,
  c.TYPE_NAME,
  DECODE(c.NOT_NULL, TRUE, 1, 0) AS NOT_NULL,
  c.DEF_VAL
FROM USER_COLUMNS c
WHERE c.TABLE_ID = (SELECT TABLE_ID FROM USER_TABLES WHERE TABLE_NAME = ?)
ORDER BY c.COL_NO
"#;

/// The primary-key column list lives in the constraint's DEFINE string
/// (`"ID"` or `"COL1","COL2"`), not in separate rows.
pub(crate) const PRIMARY_KEY_QUERY: &str = r#"
SELECT b.DEFINE
FROM USER_TABLES a
INNER JOIN USER_CONSTRAINTS b ON a.TABLE_ID = b.TABLE_ID
WHERE b.CONS_TYPE = 'P'
  AND a.TABLE_NAME = ?
"#;

/// One row per (index, column), columns in key order.
pub(crate) const INDEX_COLUMNS_QUERY: &str = r#"
SELECT
  i.INDEX_NAME,
  DECODE(i.IS_UNIQUE, TRUE, 1, 0) AS IS_UNIQUE,
  k.COL_NAME
FROM USER_INDEXES i
INNER JOIN USER_INDEX_COLUMNS k ON i.INDEX_ID = k.INDEX_ID
WHERE i.TABLE_ID = (SELECT TABLE_ID FROM USER_TABLES WHERE TABLE_NAME = ?)
ORDER BY i.INDEX_NAME, k.COL_NO
"#;

pub(crate) const FOREIGN_KEYS_QUERY: &str = r#"
SELECT
  COLUMN_NAME,
  REFERENCED_TABLE_NAME,
  REFERENCED_COLUMN_NAME
FROM INFORMATION_SCHEMA.KEY_COLUMN_USAGE
WHERE TABLE_NAME = ?
  AND TABLE_SCHEMA = DATABASE()
  AND REFERENCED_TABLE_NAME IS NOT NULL
  AND REFERENCED_COLUMN_NAME IS NOT NULL
"#;
