//! os-diff - Compare service configuration between podman and OpenShift.
//!
//! # Usage
//!
//! ```bash
//! # Local files
//! os-diff diff tests/podman/keystone.conf tests/ocp/keystone.conf
//!
//! # Remote files, each side fetched through a command prefix
//! os-diff diff /etc/glance/glance-api.conf /etc/glance/glance.conf.d/00-config.conf \
//!     --left-cmd "ssh -F ssh.config standalone podman exec a6e1ca049eee" \
//!     --right-cmd "oc exec glance-external-api-6cf6c98564-blggc -c glance-api --"
//!
//! # OVS external-ids against an OpenStackDataPlaneNodeSet
//! os-diff edpm --external-ids ovs.txt --spec nodeset.yaml --service-config config.yaml
//!
//! # Every enabled service of a mapping file, podman vs pod
//! os-diff service --service-config config.yaml
//!
//! # A podman-side file against each customServiceConfig of a control plane
//! os-diff custom-config /etc/keystone/keystone.conf --control-plane openstack.yaml \
//!     --podman-cmd "ssh -F ssh.config standalone podman exec keystone"
//!
//! # A podman-side file against a ConfigMap entry
//! os-diff custom-config /etc/keystone/keystone.conf --configmap keystone-config-data
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use os_diff::config::{parse, parse_external_ids, parse_flat, CanonicalConfig, FilterSet};
use os_diff::diff::{compare_configs, compare_mapping};
use os_diff::fetch::Source;
use os_diff::report::Report;
use os_diff::resolve::DeploymentSpec;
use os_diff::service::{configmap_data, extract_custom_service_config, ServiceConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "os-diff")]
#[command(version)]
#[command(about = "Compare service configuration between podman and OpenShift deployments")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output location. Use '-' for stdout
    #[arg(long, short, global = true, default_value = "-")]
    output: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the diff of two configuration files
    Diff {
        left: String,
        right: String,

        /// Command prefix used to cat the left file remotely
        #[arg(long)]
        left_cmd: Option<String>,

        /// Command prefix used to cat the right file remotely
        #[arg(long)]
        right_cmd: Option<String>,

        /// Section to exclude (repeatable)
        #[arg(long = "filter-section")]
        filter_sections: Vec<String>,

        /// Key to exclude (repeatable)
        #[arg(long = "filter-key")]
        filter_keys: Vec<String>,
    },

    /// Compare flat on-host values against a dataplane node set
    Edpm {
        /// File holding the on-host values
        #[arg(long)]
        external_ids: PathBuf,

        /// Format of the on-host values file
        #[arg(long, value_enum, default_value = "external-ids")]
        format: FlatFormat,

        /// Node set specification (YAML or JSON)
        #[arg(long)]
        spec: PathBuf,

        /// Service mapping file
        #[arg(long)]
        service_config: PathBuf,

        /// Service holding the key mapping
        #[arg(long, default_value = "ovs_external_ids")]
        service: String,
    },

    /// Compare every enabled service between its podman container and pod
    Service {
        /// Service mapping file
        #[arg(long)]
        service_config: PathBuf,

        /// Only compare this service
        #[arg(long)]
        service: Option<String>,

        /// Command used to reach the podman host
        #[arg(long, default_value = "ssh -F ssh.config standalone")]
        ssh_cmd: String,

        /// Section to exclude in addition to the service's filters (repeatable)
        #[arg(long = "filter-section")]
        filter_sections: Vec<String>,

        /// Key to exclude in addition to the service's filters (repeatable)
        #[arg(long = "filter-key")]
        filter_keys: Vec<String>,
    },

    /// Compare a podman-side file against OpenShift custom service config
    CustomConfig {
        /// Podman-side configuration file
        file: String,

        /// Command prefix used to cat the podman-side file remotely
        #[arg(long)]
        podman_cmd: Option<String>,

        /// OpenStackControlPlane resource file holding customServiceConfig blocks
        #[arg(long, conflicts_with = "configmap", required_unless_present = "configmap")]
        control_plane: Option<PathBuf>,

        /// ConfigMap whose data entries are compared
        #[arg(long)]
        configmap: Option<String>,

        /// Only compare this ConfigMap data entry
        #[arg(long, requires = "configmap")]
        key: Option<String>,

        /// Section to exclude (repeatable)
        #[arg(long = "filter-section")]
        filter_sections: Vec<String>,

        /// Key to exclude (repeatable)
        #[arg(long = "filter-key")]
        filter_keys: Vec<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FlatFormat {
    /// `{key=value, ...}` as printed by ovs-vsctl
    ExternalIds,
    /// One `key=value` per line
    Flat,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut output: Box<dyn Write> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(
            fs::File::create(&cli.output)
                .map_err(|e| format!("Failed to create output file {:?}: {}", cli.output, e))?,
        )
    };

    match cli.command {
        Commands::Diff {
            left,
            right,
            left_cmd,
            right_cmd,
            filter_sections,
            filter_keys,
        } => {
            let filters = FilterSet::new()
                .with_sections(filter_sections)
                .with_keys(filter_keys);
            let left = side_source(left, left_cmd);
            let right = side_source(right, right_cmd);
            diff(&left, &right, &filters, &mut output)?;
        }
        Commands::Edpm {
            external_ids,
            format,
            spec,
            service_config,
            service,
        } => {
            edpm(&external_ids, format, &spec, &service_config, &service, &mut output)?;
        }
        Commands::Service {
            service_config,
            service,
            ssh_cmd,
            filter_sections,
            filter_keys,
        } => {
            let extra = FilterSet::new()
                .with_sections(filter_sections)
                .with_keys(filter_keys);
            services(&service_config, service.as_deref(), &ssh_cmd, &extra, &mut output)?;
        }
        Commands::CustomConfig {
            file,
            podman_cmd,
            control_plane,
            configmap,
            key,
            filter_sections,
            filter_keys,
        } => {
            let filters = FilterSet::new()
                .with_sections(filter_sections)
                .with_keys(filter_keys);
            let podman = side_source(file, podman_cmd);
            let targets = match (control_plane, configmap) {
                (_, Some(name)) => configmap_targets(&name, key.as_deref())?,
                (Some(path), None) => control_plane_targets(&path)?,
                (None, None) => return Err("--control-plane or --configmap is required".into()),
            };
            custom_config(&podman, targets, &filters, &mut output)?;
        }
    }

    Ok(())
}

fn side_source(path: String, cmd: Option<String>) -> Source {
    match cmd {
        Some(command) => Source::Shell { command, path },
        None => Source::File(PathBuf::from(path)),
    }
}

fn diff(
    left: &Source,
    right: &Source,
    filters: &FilterSet,
    output: &mut dyn Write,
) -> Result<bool, Box<dyn std::error::Error>> {
    let left = parse(&left.fetch()?, filters)?;
    let right = parse(&right.fetch()?, filters)?;
    write_report(&left, &right, output)
}

fn write_report(
    left: &CanonicalConfig,
    right: &CanonicalConfig,
    output: &mut dyn Write,
) -> Result<bool, Box<dyn std::error::Error>> {
    let report = Report::new(compare_configs(left, right));
    for line in report.sectioned_lines() {
        writeln!(output, "{}", line)?;
    }
    Ok(!report.is_empty())
}

fn edpm(
    values_file: &Path,
    format: FlatFormat,
    spec_file: &Path,
    service_config: &Path,
    service: &str,
    output: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(values_file)
        .map_err(|e| format!("Failed to read file {:?}: {}", values_file, e))?;
    let source = match format {
        FlatFormat::ExternalIds => parse_external_ids(&content),
        FlatFormat::Flat => parse_flat(&content),
    };

    let spec = DeploymentSpec::load(spec_file)?;
    let config = ServiceConfig::load(service_config)?;
    let mapping = &config.service(service)?.config_mapping;

    let report = Report::new(compare_mapping(&source, mapping, &spec));
    write!(output, "{}", report)?;
    Ok(())
}

fn services(
    service_config: &Path,
    only: Option<&str>,
    ssh_cmd: &str,
    extra: &FilterSet,
    output: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServiceConfig::load(service_config)?;
    let selected: Vec<_> = match only {
        Some(name) => vec![(name, config.service(name)?)],
        None => config.enabled().collect(),
    };

    for (name, service) in selected {
        for path in &service.path {
            let podman = service.podman_source(ssh_cmd, path);
            let pod = service.pod_source(path);
            writeln!(output, "# {} {}", name, path)?;
            let filters = service.filters.union(extra);
            if !diff(&podman, &pod, &filters, output)? {
                writeln!(output, "# no differences")?;
            }
        }
    }
    Ok(())
}

fn control_plane_targets(path: &Path) -> Result<Vec<(String, Vec<u8>)>, Box<dyn std::error::Error>> {
    let raw = Source::File(path.to_path_buf()).fetch()?;
    let configs = extract_custom_service_config(&String::from_utf8(raw)?)?;
    Ok(configs
        .into_iter()
        .enumerate()
        .map(|(i, config)| (format!("customServiceConfig #{}", i + 1), config.into_bytes()))
        .collect())
}

fn configmap_targets(
    name: &str,
    key: Option<&str>,
) -> Result<Vec<(String, Vec<u8>)>, Box<dyn std::error::Error>> {
    let raw = Source::ConfigMap {
        name: name.to_string(),
    }
    .fetch()?;
    let data = configmap_data(&String::from_utf8(raw)?)?;
    let targets: Vec<(String, Vec<u8>)> = data
        .into_iter()
        .filter(|(entry, _)| key.map_or(true, |k| k == entry.as_str()))
        .map(|(entry, content)| (format!("configmap/{} {}", name, entry), content.into_bytes()))
        .collect();
    if let (Some(k), true) = (key, targets.is_empty()) {
        return Err(format!("configmap/{} has no data entry {:?}", name, k).into());
    }
    Ok(targets)
}

fn custom_config(
    podman: &Source,
    targets: Vec<(String, Vec<u8>)>,
    filters: &FilterSet,
    output: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let left = parse(&podman.fetch()?, filters)?;
    for (label, raw) in targets {
        writeln!(output, "# {}", label)?;
        let right = parse(&raw, filters)?;
        if !write_report(&left, &right, output)? {
            writeln!(output, "# no differences")?;
        }
    }
    Ok(())
}
