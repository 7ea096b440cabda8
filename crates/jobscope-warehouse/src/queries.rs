//! SQL for the five reports and the join diagnostic.
//!
//! Postings reach companies through `TRY_CAST(company_name AS BIGINT)`; rows
//! whose identifier does not parse or match are dropped by the inner joins.
//! The only bound parameters are the configured row limits. Nothing a user
//! types is ever spliced into these strings.

/// Most-posted titles per industry. Params: `top_n`.
pub const TOP_TITLES_BY_INDUSTRY: &str = "
WITH matched AS (
    SELECT ci.industry, jp.title
    FROM job_postings jp
    JOIN companies c ON TRY_CAST(jp.company_name AS BIGINT) = c.company_id
    JOIN company_industries ci ON c.company_id = ci.company_id
    WHERE ci.industry IS NOT NULL AND jp.title IS NOT NULL
),
ranked AS (
    SELECT
        industry,
        title,
        COUNT(*) AS postings,
        ROW_NUMBER() OVER (
            PARTITION BY industry
            ORDER BY COUNT(*) DESC, title ASC
        ) AS rn
    FROM matched
    GROUP BY industry, title
)
SELECT industry, title, postings
FROM ranked
WHERE rn <= ?
ORDER BY industry, postings DESC, title
";

/// Best-paid titles per industry. Params: `top_n`.
///
/// `pay_period` comes from the posting that carries the maximum salary. Ties on
/// salary take the alphabetically first non-null period.
pub const TOP_PAID_TITLES_BY_INDUSTRY: &str = "
WITH matched AS (
    SELECT ci.industry, jp.title, jp.max_salary, jp.pay_period
    FROM job_postings jp
    JOIN companies c ON TRY_CAST(jp.company_name AS BIGINT) = c.company_id
    JOIN company_industries ci ON c.company_id = ci.company_id
    WHERE jp.max_salary IS NOT NULL
      AND ci.industry IS NOT NULL
      AND jp.title IS NOT NULL
),
per_title AS (
    SELECT
        industry,
        title,
        MAX(max_salary) AS max_salary,
        first(pay_period ORDER BY max_salary DESC, pay_period ASC NULLS LAST) AS pay_period
    FROM matched
    GROUP BY industry, title
),
ranked AS (
    SELECT
        industry,
        title,
        max_salary,
        pay_period,
        ROW_NUMBER() OVER (
            PARTITION BY industry
            ORDER BY max_salary DESC NULLS LAST, title ASC
        ) AS rn
    FROM per_title
)
SELECT industry, title, CAST(max_salary AS DOUBLE) AS max_salary, pay_period
FROM ranked
WHERE rn <= ?
ORDER BY industry, max_salary DESC, title
";

/// Postings per raw company-size ordinal. Bands are decoded client-side.
pub const POSTINGS_BY_COMPANY_SIZE: &str = "
SELECT
    CAST(c.company_size AS BIGINT) AS company_size,
    COUNT(*) AS postings
FROM job_postings jp
JOIN companies c ON TRY_CAST(jp.company_name AS BIGINT) = c.company_id
GROUP BY c.company_size
ORDER BY c.company_size ASC NULLS LAST
";

/// Postings per industry, largest first. Params: `industry_limit`.
pub const POSTINGS_BY_INDUSTRY: &str = "
SELECT ci.industry, COUNT(*) AS postings
FROM job_postings jp
JOIN companies c ON TRY_CAST(jp.company_name AS BIGINT) = c.company_id
JOIN company_industries ci ON c.company_id = ci.company_id
WHERE ci.industry IS NOT NULL
GROUP BY ci.industry
ORDER BY postings DESC, ci.industry ASC
LIMIT ?
";

/// Postings and share of total per work type.
///
/// The share is a window over the grouped counts, so it is relative to every
/// posting that has a work type.
pub const POSTINGS_BY_WORK_TYPE: &str = "
SELECT
    formatted_work_type AS work_type,
    COUNT(*) AS postings,
    CAST(ROUND(COUNT(*) * 100.0 / SUM(COUNT(*)) OVER (), 2) AS DOUBLE) AS percentage
FROM job_postings
WHERE formatted_work_type IS NOT NULL
GROUP BY formatted_work_type
ORDER BY postings DESC, work_type ASC
";

/// Where postings fall out of the company and industry joins, and how many
/// joined postings the title reports skip for lacking a title.
pub const JOIN_DIAGNOSTICS: &str = "
WITH keyed AS (
    SELECT TRY_CAST(company_name AS BIGINT) AS company_key, title
    FROM job_postings
),
known AS (
    SELECT DISTINCT company_id FROM companies
),
with_industry AS (
    SELECT DISTINCT company_id
    FROM company_industries
    WHERE industry IS NOT NULL
)
SELECT
    COUNT(*) AS total_postings,
    COUNT(*) FILTER (WHERE k.company_key IS NULL) AS unparseable_identifier,
    COUNT(*) FILTER (
        WHERE k.company_key IS NOT NULL AND kn.company_id IS NULL
    ) AS unmatched_company,
    COUNT(*) FILTER (
        WHERE kn.company_id IS NOT NULL AND wi.company_id IS NULL
    ) AS without_industry,
    COUNT(*) FILTER (
        WHERE wi.company_id IS NOT NULL AND k.title IS NULL
    ) AS without_title
FROM keyed k
LEFT JOIN known kn ON k.company_key = kn.company_id
LEFT JOIN with_industry wi ON kn.company_id = wi.company_id
";
