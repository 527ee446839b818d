//! Fixed checklist of environment-level dependencies.

/// Infrastructure and service names an audited production environment
/// commonly relies on, in reporting order.
pub const ENV_DEPENDENCIES: [&str; 25] = [
    "PostgreSQL",
    "Redis",
    "RabbitMQ",
    "Azure",
    "SQL Server",
    "MySQL",
    "MongoDB",
    "CosmosDB",
    "Kafka",
    "Elasticsearch",
    "OpenAI",
    "Duende IdentityServer",
    "YARP",
    "gRPC",
    "Polly",
    "Nginx",
    "Traefik",
    "Key Vault",
    "Blob Storage",
    "Service Bus",
    "App Insights",
    "Application Insights",
    "Maui",
    "Ollama",
    "Pgvector",
];

/// An ordered, immutable list of environment dependency names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvChecklist {
    entries: &'static [&'static str],
}

impl EnvChecklist {
    /// The standard 25-entry checklist
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            entries: &ENV_DEPENDENCIES,
        }
    }

    /// A checklist over a caller-provided static list
    #[must_use]
    pub const fn from_static(entries: &'static [&'static str]) -> Self {
        Self { entries }
    }

    /// Entries in checklist order
    #[must_use]
    pub const fn entries(&self) -> &'static [&'static str] {
        self.entries
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EnvChecklist {
    fn default() -> Self {
        Self::standard()
    }
}
