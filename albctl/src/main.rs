mod command;

use std::path::PathBuf;

use alb_sdk::{ApiOptions, AviSession, DEFAULT_API_VERSION, DEFAULT_TENANT, PatchOp, SessionConfig};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;

use command::{OutputFormat, Selector};

const LOG_LEVEL_ENV_VAR: &str = "RUST_LOG";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "albctl")]
#[command(about = "Inspects and edits objects on an Avi Controller", long_about = None)]
struct Cli {
    #[command(flatten)]
    connection: Connection,

    /// Format of printed objects
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct Connection {
    /// Controller address: host, host:port or URL
    #[arg(long, env = "ALB_CONTROLLER")]
    controller: String,

    #[arg(long, env = "ALB_USERNAME", default_value = "admin")]
    username: String,

    #[arg(long, env = "ALB_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Auth token, used when no password is given
    #[arg(long, env = "ALB_AUTH_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[arg(long, env = "ALB_TENANT", default_value = DEFAULT_TENANT)]
    tenant: String,

    #[arg(long, env = "ALB_API_VERSION", default_value = DEFAULT_API_VERSION)]
    api_version: String,

    /// Do not verify the controller's TLS certificate
    #[arg(long, env = "ALB_INSECURE")]
    insecure: bool,
}

impl Connection {
    fn session_config(&self) -> SessionConfig {
        let mut config = SessionConfig::new(&self.controller)
            .with_username(&self.username)
            .with_tenant(&self.tenant)
            .with_version(&self.api_version)
            .with_insecure(self.insecure);
        if let Some(token) = &self.token {
            config = config.with_token(token);
        }
        if let Some(password) = &self.password {
            config = config.with_password(password);
        }
        config
    }
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Target {
    #[arg(long)]
    uuid: Option<String>,

    #[arg(long)]
    name: Option<String>,
}

impl Target {
    fn selector(self) -> Selector {
        match (self.uuid, self.name) {
            (Some(uuid), _) => Selector::Uuid(uuid),
            (None, name) => Selector::Name(name.unwrap_or_default()),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints all objects of a type
    List {
        /// Object type as in `/api/<type>`, e.g. `trustedhostprofile`
        object_type: String,

        /// Only objects in this cloud
        #[arg(long)]
        cloud: Option<String>,

        /// Extra query parameter, as `key=value`
        #[arg(long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Prints one object
    Get {
        object_type: String,

        #[command(flatten)]
        target: Target,
    },
    /// Creates an object from a JSON or YAML file
    Create {
        object_type: String,

        #[arg(short, long)]
        file: PathBuf,
    },
    /// Replaces an object with the content of a file; the file must carry the uuid
    Update {
        object_type: String,

        #[arg(short, long)]
        file: PathBuf,
    },
    /// Applies a partial update from a file
    Patch {
        object_type: String,

        uuid: String,

        /// add, replace or delete
        #[arg(long, default_value = "replace")]
        op: PatchOp,

        #[arg(short, long)]
        file: PathBuf,
    },
    /// Deletes one object
    Delete {
        object_type: String,

        #[command(flatten)]
        target: Target,
    },
    /// Saves all objects of the given types, one file per type
    Export {
        #[arg(required = true)]
        object_types: Vec<String>,

        /// Number of collections fetched at the same time
        #[arg(short = 'c', long, default_value_t = 3)]
        concurrency: usize,

        #[arg(short = 'o', long, default_value = "export")]
        output_dir: PathBuf,
    },
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("'{s}' is not of the form key=value")),
    }
}

fn print(value: &serde_json::Value, format: OutputFormat) -> Result<()> {
    println!("{}", command::render(value, format)?);
    Ok(())
}

async fn run(session: &AviSession, command: Command, format: OutputFormat) -> Result<()> {
    match command {
        Command::List {
            object_type,
            cloud,
            params,
        } => {
            let mut options = ApiOptions::new();
            if let Some(cloud) = cloud {
                options = options.with_cloud(cloud);
            }
            for (key, value) in params {
                options = options.with_param(key, value);
            }
            print(&command::list(session, &object_type, &options).await?, format)
        }
        Command::Get {
            object_type,
            target,
        } => print(
            &command::get(session, &object_type, &target.selector()).await?,
            format,
        ),
        Command::Create { object_type, file } => {
            print(&command::create(session, &object_type, &file).await?, format)
        }
        Command::Update { object_type, file } => {
            print(&command::update(session, &object_type, &file).await?, format)
        }
        Command::Patch {
            object_type,
            uuid,
            op,
            file,
        } => print(
            &command::patch(session, &object_type, &uuid, op, &file).await?,
            format,
        ),
        Command::Delete {
            object_type,
            target,
        } => command::delete(session, &object_type, &target.selector()).await,
        Command::Export {
            object_types,
            concurrency,
            output_dir,
        } => command::export(session, &object_types, concurrency, &output_dir, format).await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_LEVEL_ENV_VAR, DEFAULT_LOG_LEVEL))
        .init();

    let cli = Cli::parse();
    let session = AviSession::new(cli.connection.session_config())?;
    let result = run(&session, cli.command, cli.output).await;
    session.logout().await?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["albctl", "--controller", "10.10.10.10", "--password", "secret"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_connection_flags() {
        let cli = Cli::try_parse_from([
            "albctl",
            "--controller",
            "ctrl.example.com",
            "--username",
            "amko",
            "--token",
            "token-1",
            "--tenant",
            "*",
            "--insecure",
            "list",
            "virtualservice",
        ])
        .unwrap();
        let config = cli.connection.session_config();
        assert_eq!("ctrl.example.com", config.controller());
        assert_eq!("amko", config.username());
        assert_eq!("*", config.tenant());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_list() {
        let cli = parse(&[
            "--output",
            "yaml",
            "list",
            "pool",
            "--cloud",
            "Default-Cloud",
            "--param",
            "fields=name,uuid",
        ]);
        assert_eq!(OutputFormat::Yaml, cli.output);
        match cli.command {
            Command::List {
                object_type,
                cloud,
                params,
            } => {
                assert_eq!("pool", object_type);
                assert_eq!(Some("Default-Cloud".to_string()), cloud);
                assert_eq!(vec![("fields".to_string(), "name,uuid".to_string())], params);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_target_is_exclusive_and_required() {
        match parse(&["get", "techsupportprofile", "--name", "default"]).command {
            Command::Get { target, .. } => {
                assert_eq!(Selector::Name("default".to_string()), target.selector())
            }
            other => panic!("unexpected command {other:?}"),
        }

        let base = ["albctl", "--controller", "c", "--password", "p", "delete", "report"];
        assert!(Cli::try_parse_from(base).is_err());
        let both = [&base[..], &["--uuid", "report-1", "--name", "weekly"][..]].concat();
        assert!(Cli::try_parse_from(both).is_err());
    }

    #[test]
    fn test_patch() {
        let cli = parse(&["patch", "trustedhostprofile", "thp-1", "--op", "add", "-f", "hosts.yaml"]);
        match cli.command {
            Command::Patch { uuid, op, file, .. } => {
                assert_eq!("thp-1", uuid);
                assert_eq!(PatchOp::Add, op);
                assert_eq!(PathBuf::from("hosts.yaml"), file);
            }
            other => panic!("unexpected command {other:?}"),
        }
        let argv = ["albctl", "--controller", "c", "patch", "pool", "pool-1", "--op", "remove", "-f", "x"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_export_defaults() {
        match parse(&["export", "gslbsmruntime", "gslbcrmruntime"]).command {
            Command::Export {
                object_types,
                concurrency,
                output_dir,
            } => {
                assert_eq!(vec!["gslbsmruntime", "gslbcrmruntime"], object_types);
                assert_eq!(3, concurrency);
                assert_eq!(PathBuf::from("export"), output_dir);
            }
            other => panic!("unexpected command {other:?}"),
        }
        let argv = ["albctl", "--controller", "c", "export"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_parse_param() {
        assert_eq!(Ok(("a".to_string(), "b=c".to_string())), parse_param("a=b=c"));
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=x").is_err());
    }
}
