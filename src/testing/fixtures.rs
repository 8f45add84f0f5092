//! Scripts shared by tests across modules.

/// Three selects; the first returns cursors, the last carries a comment and
/// a description.
pub const MULTI_SQL: &str = "-- @returns cursors
SELECT * FROM report.yearly_summary(2024);

SELECT * FROM report.pivot_by_year(2024);

-- Monthly totals
-- @describe Totals per month
SELECT * FROM report.monthly(2024, NULL);";

/// A PL/pgSQL function whose block closes right before its body quote.
pub const FUNCTION_SQL: &str = "CREATE OR REPLACE FUNCTION billing.monthly_totals(
\tIN p_year NUMERIC ( 4 ),
\tIN p_team CHARACTER VARYING DEFAULT NULL
)
RETURNS TABLE (
\tmonth NUMERIC ( 2 ),
\t\"total\" NUMERIC ( 12 )
)
LANGUAGE plpgsql
AS $$
BEGIN
    RETURN QUERY
        SELECT inv.month, SUM(inv.amount) AS \"total\"
        FROM billing.invoices AS inv
        WHERE inv.year = p_year
        GROUP BY 1;
END $$;";

/// Statements that are neither SELECT nor CREATE.
pub const MIXED_SQL: &str = "INSERT INTO t VALUES (1);
DO $$ BEGIN PERFORM 1; END; $$;
SELECT 2;
DECLARE c CURSOR FOR SELECT 1;";

/// Template definitions used before and after their declaration.
pub const TEMPLATE_SQL: &str = "@sql columns{id, {{audit}}}
-- @returns cursors
SELECT {{columns}} FROM users;
@audit{created_at, updated_at}
SELECT {{audit}} FROM logins;";
