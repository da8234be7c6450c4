//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// Database
// =============================================================================

/// Default Postgres host
pub const DEFAULT_PG_HOST: &str = "localhost";

/// Default Postgres port
pub const DEFAULT_PG_PORT: u16 = 5432;

/// Default Postgres database name
pub const DEFAULT_PG_DATABASE: &str = "certificates";

/// Default Postgres user
pub const DEFAULT_PG_USER: &str = "postgres";

/// Maximum pooled connections to the account store
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// Password Hashing (Argon2id)
// =============================================================================

/// Memory cost in KiB
pub const PASSWORD_MEMORY_COST_KIB: u32 = 19_456;

/// Number of iterations
pub const PASSWORD_TIME_COST: u32 = 2;

/// Degree of parallelism
pub const PASSWORD_PARALLELISM: u32 = 1;

// =============================================================================
// Certificates
// =============================================================================

/// Template path relative to the install or working directory
pub const DEFAULT_TEMPLATE_FILE: &str = "assets/certificate.svg";

/// Placeholder replaced with the certificate holder's name
pub const PLACEHOLDER_USER_NAME: &str = "{{USER_NAME}}";

/// Placeholder replaced with the instructor's name
pub const PLACEHOLDER_INSTRUCTOR_NAME: &str = "{{INSTRUCTOR_NAME}}";

/// A4 page width in millimetres
pub const A4_WIDTH_MM: f32 = 210.0;

/// A4 page height in millimetres
pub const A4_HEIGHT_MM: f32 = 297.0;

/// PDF points per millimetre (72 pt per inch / 25.4 mm per inch)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Download filename for generated certificates
pub const CERTIFICATE_FILENAME: &str = "certificate.pdf";

/// MIME type of generated certificates
pub const CERTIFICATE_CONTENT_TYPE: &str = "application/pdf";
