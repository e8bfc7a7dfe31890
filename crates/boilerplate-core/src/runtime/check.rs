//! Package manager and author detection

use std::fmt;
use std::process::Command;

/// Environment variable npm-compatible package managers set for child processes
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// Package managers that can run the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Parse a user agent such as `pnpm/8.6.0 npm/? node/v18.16.0 linux x64`
    pub fn from_user_agent(user_agent: &str) -> Option<Self> {
        let first = user_agent.split_whitespace().next()?;
        let name = first.split('/').next()?;
        match name {
            "npm" => Some(PackageManager::Npm),
            "yarn" => Some(PackageManager::Yarn),
            "pnpm" => Some(PackageManager::Pnpm),
            "bun" => Some(PackageManager::Bun),
            _ => None,
        }
    }

    /// Detect from the environment, falling back to npm
    pub fn detect() -> Self {
        std::env::var(USER_AGENT_ENV)
            .ok()
            .and_then(|ua| Self::from_user_agent(&ua))
            .unwrap_or_default()
    }

    pub fn install_command(&self) -> String {
        match self {
            PackageManager::Yarn => "yarn".to_string(),
            _ => format!("{} install", self.name()),
        }
    }

    pub fn dev_command(&self) -> String {
        match self {
            PackageManager::Yarn => "yarn dev".to_string(),
            _ => format!("{} run dev", self.name()),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Author suggestion from `git config user.name`, if git is available
pub fn detect_author() -> Option<String> {
    let output = Command::new("git")
        .args(["config", "user.name"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!name.is_empty()).then_some(name)
}
