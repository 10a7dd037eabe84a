// schemapipe-core/src/domain/rewrite.rs

use crate::domain::error::DomainError;

/// Substitution pair applied to raw SQL text before it reaches the client.
///
/// The historical behavior used hardcoded tokens; they are carried here as an
/// explicit configuration value instead.
#[derive(Debug, Clone)]
pub struct SchemaRewrite {
    pub from: String,
    pub to: String,
}

impl SchemaRewrite {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Replace every literal, non-overlapping occurrence of the source token.
    /// This function is PURE : it does not depend on any database.
    ///
    /// Literal matching only: no awareness of SQL syntax, quoting or
    /// comments, so the token is also rewritten inside string literals and
    /// comments. An empty source token is rejected.
    pub fn apply(&self, sql: &str) -> Result<String, DomainError> {
        if self.from.is_empty() {
            return Err(DomainError::EmptySourceSchema);
        }

        if !sql.contains(&self.from) {
            return Ok(sql.to_string());
        }

        Ok(sql.replace(&self.from, &self.to))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn default_rewrite() -> SchemaRewrite {
        SchemaRewrite::new("mimiciii", "public")
    }

    #[test]
    fn test_apply_rewrites_qualified_table() -> Result<()> {
        let sql = "SELECT * FROM mimiciii.admissions;";
        let result = default_rewrite().apply(sql)?;

        insta::assert_snapshot!(result, @"SELECT * FROM public.admissions;");
        Ok(())
    }

    #[test]
    fn test_apply_replaces_every_occurrence() -> Result<()> {
        let sql = "SELECT a.subject_id\nFROM mimiciii.admissions a\nJOIN mimiciii.patients p ON p.subject_id = a.subject_id;";
        let result = default_rewrite().apply(sql)?;

        assert!(!result.contains("mimiciii"));
        assert_eq!(result.matches("public.").count(), 2);
        Ok(())
    }

    #[test]
    fn test_apply_zero_occurrence_is_byte_identical() -> Result<()> {
        let sql = "SELECT 1;\n-- nothing to rewrite here\n";
        let result = default_rewrite().apply(sql)?;

        assert_eq!(result, sql);
        Ok(())
    }

    #[test]
    fn test_apply_rewrites_inside_literals_and_comments() -> Result<()> {
        // The transform is token-blind: quoted strings and comments are
        // rewritten too.
        let sql = "-- built from mimiciii\nSELECT 'mimiciii' AS source FROM mimiciii.d_items;";
        let result = default_rewrite().apply(sql)?;

        assert_eq!(
            result,
            "-- built from public\nSELECT 'public' AS source FROM public.d_items;"
        );
        Ok(())
    }

    #[test]
    fn test_apply_non_overlapping_matches() -> Result<()> {
        let rewrite = SchemaRewrite::new("aa", "b");
        let result = rewrite.apply("aaaa")?;

        assert_eq!(result, "bb");
        Ok(())
    }

    #[test]
    fn test_apply_idempotent_when_target_disjoint() -> Result<()> {
        let rewrite = default_rewrite();
        let once = rewrite.apply("INSERT INTO mimiciii.chartevents VALUES (1);")?;
        let twice = rewrite.apply(&once)?;

        assert_eq!(once, twice);
        Ok(())
    }

    #[test]
    fn test_apply_rejects_empty_source_token() {
        let rewrite = SchemaRewrite::new("", "public");
        let result = rewrite.apply("SELECT 1;");

        assert!(matches!(result, Err(DomainError::EmptySourceSchema)));
    }
}
