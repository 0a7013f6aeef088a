//! Tool registry and definitions.
//!
//! Defines every tool Sherpa knows how to install: its install script, the
//! command that verifies it is present, and the tools it depends on. The
//! table is fixed at build time; there is no dynamic registration.
//!
//! Install scripts assume a Debian/Ubuntu-style host (apt-get, systemctl,
//! snap). That is an environmental assumption of the tool, not a
//! configurable target.

use crate::error::{Result, SherpaError};
use std::collections::BTreeMap;

/// How to install and verify one tool.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    /// Canonical tool identifier (e.g. "docker", "postgresql").
    pub name: String,
    /// Shell script that installs the tool. May be multi-line. Empty when
    /// the tool ships with one of its dependencies (npm comes with node).
    pub install: String,
    /// Command whose zero exit status proves the tool is present.
    pub verify: String,
    /// Tools that must be installed first, in order.
    pub depends_on: Vec<String>,
}

const DOCKER_INSTALL: &str = r#"sudo apt-get update
sudo apt-get install -y apt-transport-https ca-certificates curl software-properties-common
curl -fsSL https://download.docker.com/linux/ubuntu/gpg | sudo apt-key add -
sudo add-apt-repository "deb [arch=amd64] https://download.docker.com/linux/ubuntu $(lsb_release -cs) stable"
sudo apt-get update
sudo apt-get install -y docker-ce docker-ce-cli containerd.io
sudo usermod -aG docker $USER"#;

const DOCKER_COMPOSE_INSTALL: &str = r#"sudo curl -L "https://github.com/docker/compose/releases/download/v2.18.1/docker-compose-$(uname -s)-$(uname -m)" -o /usr/local/bin/docker-compose
sudo chmod +x /usr/local/bin/docker-compose"#;

const NVM_INSTALL: &str = r#"curl -o- https://raw.githubusercontent.com/nvm-sh/nvm/v0.39.3/install.sh | bash
export NVM_DIR="$HOME/.nvm"
[ -s "$NVM_DIR/nvm.sh" ] && \. "$NVM_DIR/nvm.sh""#;

const GRADLE_INSTALL: &str = r#"wget -q https://services.gradle.org/distributions/gradle-8.3-bin.zip -P /tmp
sudo unzip -d /opt/gradle /tmp/gradle-*.zip
echo 'export PATH=$PATH:/opt/gradle/gradle-8.3/bin' >> ~/.bashrc
export PATH=$PATH:/opt/gradle/gradle-8.3/bin"#;

const MONGODB_INSTALL: &str = r#"wget -qO - https://www.mongodb.org/static/pgp/server-6.0.asc | sudo apt-key add -
echo "deb [ arch=amd64,arm64 ] https://repo.mongodb.org/apt/ubuntu $(lsb_release -cs)/mongodb-org/6.0 multiverse" | sudo tee /etc/apt/sources.list.d/mongodb-org-6.0.list
sudo apt-get update
sudo apt-get install -y mongodb-org
sudo systemctl start mongod
sudo systemctl enable mongod"#;

const POSTGRESQL_INSTALL: &str = r#"sudo apt-get update
sudo apt-get install -y postgresql postgresql-contrib
sudo systemctl start postgresql
sudo systemctl enable postgresql"#;

const MYSQL_INSTALL: &str = r#"sudo apt-get update
sudo apt-get install -y mysql-server
sudo systemctl start mysql
sudo systemctl enable mysql
sudo mysql_secure_installation"#;

const REDIS_INSTALL: &str = r#"sudo apt-get update
sudo apt-get install -y redis-server
sudo systemctl start redis
sudo systemctl enable redis"#;

const VSCODE_INSTALL: &str = r#"wget -qO- https://packages.microsoft.com/keys/microsoft.asc | gpg --dearmor > packages.microsoft.gpg
sudo install -D -o root -g root -m 644 packages.microsoft.gpg /etc/apt/keyrings/packages.microsoft.gpg
sudo sh -c 'echo "deb [arch=amd64,arm64,armhf signed-by=/etc/apt/keyrings/packages.microsoft.gpg] https://packages.microsoft.com/repos/code stable main" > /etc/apt/sources.list.d/vscode.list'
rm -f packages.microsoft.gpg
sudo apt update
sudo apt install -y code"#;

/// Registry of all known tools.
pub struct ToolRegistry {
    tools: BTreeMap<String, ToolSpec>,
}

impl ToolRegistry {
    /// Create a registry with the built-in tool table.
    pub fn new() -> Self {
        let mut tools = BTreeMap::new();

        let mut add = |name: &str, install: &str, verify: &str, depends_on: &[&str]| {
            tools.insert(
                name.to_string(),
                ToolSpec {
                    name: name.to_string(),
                    install: install.to_string(),
                    verify: verify.to_string(),
                    depends_on: depends_on.iter().map(|s| s.to_string()).collect(),
                },
            );
        };

        add(
            "git",
            "sudo apt-get update && sudo apt-get install -y git",
            "git --version",
            &[],
        );
        add("docker", DOCKER_INSTALL, "docker --version", &[]);
        add(
            "docker-compose",
            DOCKER_COMPOSE_INSTALL,
            "docker-compose --version",
            &[],
        );
        add("nvm", NVM_INSTALL, "nvm --version", &[]);
        add("node", "nvm install --lts", "node --version", &["nvm"]);
        // npm ships with node; there is nothing to install
        add("npm", "", "npm --version", &["node"]);
        add(
            "java",
            "sudo apt-get update && sudo apt-get install -y openjdk-17-jdk",
            "java -version",
            &[],
        );
        add(
            "maven",
            "sudo apt-get update && sudo apt-get install -y maven",
            "mvn -version",
            &[],
        );
        add("gradle", GRADLE_INSTALL, "gradle -version", &[]);
        add(
            "python3",
            "sudo apt-get update && sudo apt-get install -y python3 python3-pip",
            "python3 --version && pip3 --version",
            &[],
        );
        add("mongodb", MONGODB_INSTALL, "mongod --version", &[]);
        add("postgresql", POSTGRESQL_INSTALL, "psql --version", &[]);
        add("mysql", MYSQL_INSTALL, "mysql --version", &[]);
        add("redis", REDIS_INSTALL, "redis-cli --version", &[]);
        add("vscode", VSCODE_INSTALL, "code --version", &[]);
        add(
            "intellij-idea",
            "sudo snap install intellij-idea-community --classic",
            "snap info intellij-idea-community",
            &[],
        );

        Self { tools }
    }

    /// Look up a tool by name.
    pub fn lookup(&self, name: &str) -> Result<&ToolSpec> {
        self.tools.get(name).ok_or_else(|| SherpaError::UnknownTool {
            name: name.to_string(),
        })
    }

    /// Get a tool if present, without an error.
    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.tools.get(name)
    }

    /// All known tool names, in stable sorted order.
    pub fn known_names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    /// Whether a name is a known tool identifier.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
