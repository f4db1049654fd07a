//! Raw configuration sources.

use super::pod::select_running_pod;
use crate::error::{Error, Result};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Source describes where one side of a comparison is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A local file.
    File(PathBuf),
    /// `bash -c "<command> cat <path>"`, for ssh/podman prefixes.
    Shell { command: String, path: String },
    /// `oc exec` into a running pod.
    Pod {
        pod: String,
        container: String,
        path: String,
        strict: bool,
    },
    /// `oc get configmap/<name> -o yaml`.
    ConfigMap { name: String },
}

impl Source {
    /// Builds a source that cats `path` inside a podman container reached
    /// through `ssh_cmd` (for example `ssh -F ssh.config standalone`).
    pub fn podman(ssh_cmd: &str, container: &str, path: impl Into<String>) -> Self {
        Source::Shell {
            command: format!("{} podman exec {}", ssh_cmd, container),
            path: path.into(),
        }
    }

    /// Reads the raw bytes. Errors are never retried.
    pub fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!(source = %self, "fetching configuration");
        match self {
            Source::File(path) => fs::read(path).map_err(|e| Error::io(path, e)),
            Source::Shell { command, path } => {
                let script = format!("{} cat {}", command, shell_quote(path));
                run(self, Command::new("bash").arg("-c").arg(script))
            }
            Source::Pod {
                pod,
                container,
                path,
                strict,
            } => {
                ensure_oc_login(self)?;
                let listing = run(self, Command::new("oc").args(["get", "pods", "--no-headers"]))?;
                let listing = String::from_utf8_lossy(&listing);
                let full_name = select_running_pod(&listing, pod, *strict)
                    .ok_or_else(|| Error::fetch(self.to_string(), "no running pod matches"))?;
                tracing::debug!(pod = %full_name, "resolved pod");
                run(
                    self,
                    Command::new("oc").args([
                        "exec",
                        full_name.as_str(),
                        "-c",
                        container.as_str(),
                        "--",
                        "cat",
                        path.as_str(),
                    ]),
                )
            }
            Source::ConfigMap { name } => {
                ensure_oc_login(self)?;
                let target = format!("configmap/{}", name);
                run(self, Command::new("oc").args(["get", target.as_str(), "-o", "yaml"]))
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Shell { command, path } => write!(f, "{} ({})", path, command),
            Source::Pod {
                pod,
                container,
                path,
                ..
            } => write!(f, "{} (pod {}, container {})", path, pod, container),
            Source::ConfigMap { name } => write!(f, "configmap/{}", name),
        }
    }
}

/// Wraps `s` in single quotes for `bash -c`, escaping embedded quotes.
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

fn ensure_oc_login(source: &Source) -> Result<()> {
    run(source, Command::new("oc").arg("whoami"))
        .map(|_| ())
        .map_err(|_| Error::fetch(source.to_string(), "oc is not connected, log in first"))
}

fn run(source: &Source, cmd: &mut Command) -> Result<Vec<u8>> {
    tracing::debug!(command = ?cmd, "running command");
    let output = cmd
        .output()
        .map_err(|e| Error::fetch(source.to_string(), e.to_string()))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::fetch(
            source.to_string(),
            format!("{}: {}", output.status, stderr.trim()),
        ));
    }
    Ok(output.stdout)
}
