use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Report, Result, WrapErr};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use giftcard_form::{
    DocumentFormat, GiftCardUpdateSession, OutputOptions, SessionOptions,
    app::{
        GiftCardBulkCreateFormData, MutationResponse, Notification, SubmitOutcome, SubmitPlan,
        build_bulk_create_input, classify, notification_for,
    },
    domain::{BULK_CREATE_ERROR_FIELDS, ErrorField, GiftCard, UPDATE_ERROR_FIELDS},
    form::{FormField, GiftCardFormData},
    parse_document, render,
};

const EDITABLE_FIELDS: [FormField; 12] = [
    FormField::Tag,
    FormField::Tags,
    FormField::ExpirySelected,
    FormField::ExpiryDate,
    FormField::ExpiryType,
    FormField::ExpiryPeriodType,
    FormField::ExpiryPeriodAmount,
    FormField::RequiresActivation,
    FormField::BalanceAmount,
    FormField::BalanceCurrency,
    FormField::Metadata,
    FormField::PrivateMetadata,
];

#[derive(Debug, Parser)]
#[command(
    name = "giftcard-form",
    version,
    about = "Plan gift card updates and classify mutation responses"
)]
struct Cli {
    /// Emit compact JSON rather than pretty formatting
    #[arg(long = "no-pretty", global = true)]
    no_pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the update request that moves a gift card to the edited form values
    Plan {
        /// Gift card spec: file path, inline payload, or "-" for stdin
        #[arg(short = 'e', long = "entity", value_name = "SPEC")]
        entity: String,

        /// Edited form data spec: file path, inline payload, or "-" for stdin
        #[arg(short = 'f', long = "form", value_name = "SPEC")]
        form: String,
    },
    /// Classify a mutation response and print the resulting notification
    Classify {
        /// Mutation response spec: file path, inline payload, or "-" for stdin
        #[arg(short = 'r', long = "response", value_name = "SPEC")]
        response: String,

        /// Which form the errors are displayed on
        #[arg(short = 'k', long = "keys", value_enum, default_value_t = KeySet::Update)]
        keys: KeySet,
    },
    /// Print the bulk create input for a bulk create form
    BulkCreate {
        /// Bulk create form spec: file path, inline payload, or "-" for stdin
        #[arg(short = 'f', long = "form", value_name = "SPEC")]
        form: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KeySet {
    Update,
    BulkCreate,
}

impl KeySet {
    fn fields(self) -> &'static [ErrorField] {
        match self {
            KeySet::Update => UPDATE_ERROR_FIELDS,
            KeySet::BulkCreate => BULK_CREATE_ERROR_FIELDS,
        }
    }
}

#[derive(Debug, Serialize)]
struct Classification {
    outcome: SubmitOutcome,
    notification: Option<Notification>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("giftcard_form=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let output = OutputOptions::default().with_pretty(!cli.no_pretty);
    let options = SessionOptions::default();

    match &cli.command {
        Command::Plan { entity, form } => {
            ensure_single_stdin(&[entity, form])?;
            let card: GiftCard = load_document(entity, "entity")?;
            let edited: GiftCardFormData = load_document(form, "form")?;
            match plan_update(card, &edited, options)? {
                SubmitPlan::NoOp => eprintln!("no changes to submit"),
                SubmitPlan::Dispatch(request) => print_document(&request, &output)?,
            }
        }
        Command::Classify { response, keys } => {
            let response: MutationResponse = load_document(response, "response")?;
            let outcome = classify(keys.fields(), Ok(response));
            let notification = notification_for(&outcome);
            let classification = Classification {
                outcome,
                notification,
            };
            print_document(&classification, &output)?;
        }
        Command::BulkCreate { form } => {
            let form: GiftCardBulkCreateFormData = load_document(form, "form")?;
            print_document(&build_bulk_create_input(&form), &output)?;
        }
    }

    Ok(())
}

/// Replays every field that differs from the loaded card as a form edit.
fn plan_update(
    card: GiftCard,
    edited: &GiftCardFormData,
    options: SessionOptions,
) -> Result<SubmitPlan> {
    let mut session = GiftCardUpdateSession::new(Some(card), options);
    for field in EDITABLE_FIELDS {
        let value = edited.get(field);
        if session.state().value(field) != value {
            debug!(field = %field, "replaying edit");
            session.change(field, value)?;
        }
    }
    Ok(session.begin_submit()?)
}

fn print_document<T: Serialize>(value: &T, output: &OutputOptions) -> Result<()> {
    let rendered =
        render(value, output).map_err(|err| Report::msg(format!("failed to render output: {err:#}")))?;
    println!("{rendered}");
    Ok(())
}

fn ensure_single_stdin(specs: &[&String]) -> Result<()> {
    if specs.iter().filter(|spec| spec.as_str() == "-").count() > 1 {
        return Err(Report::msg(
            "cannot read more than one document from stdin; provide inline content or files",
        ));
    }
    Ok(())
}

fn load_document<T: DeserializeOwned>(spec: &str, label: &str) -> Result<T> {
    if spec == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("failed to read from stdin")?;
        return parse_contents(&buffer, DocumentFormat::Json, label);
    }
    if looks_inline(spec) {
        return parse_contents(spec, DocumentFormat::Json, &format!("inline {label}"));
    }

    let path = PathBuf::from(spec);
    let contents = fs::read_to_string(&path)
        .wrap_err_with(|| format!("failed to read {label} file {}", path.display()))?;
    parse_contents(&contents, DocumentFormat::from_path(&path), label)
        .wrap_err_with(|| format!("failed to load {label} from {}", path.display()))
}

fn looks_inline(spec: &str) -> bool {
    spec.trim_start().starts_with(['{', '['])
}

fn parse_contents<T: DeserializeOwned>(
    contents: &str,
    format: DocumentFormat,
    label: &str,
) -> Result<T> {
    parse_document(contents, format)
        .map_err(|err| Report::msg(format!("failed to parse {label}: {err:#}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftcard_form::domain::GiftCardTag;

    fn card() -> GiftCard {
        GiftCard {
            id: "card-1".into(),
            tags: vec![GiftCardTag::new("vip")],
            expiry_date: None,
            metadata: Vec::new(),
            private_metadata: Vec::new(),
        }
    }

    #[test]
    fn identical_form_plans_nothing() {
        let edited = GiftCardFormData::from_gift_card(Some(&card()), "USD");
        let plan = plan_update(card(), &edited, SessionOptions::default()).unwrap();
        assert_eq!(plan, SubmitPlan::NoOp);
    }

    #[test]
    fn changed_tags_plan_a_dispatch() {
        let mut edited = GiftCardFormData::from_gift_card(Some(&card()), "USD");
        edited.tags = vec!["new".into()];
        let SubmitPlan::Dispatch(request) =
            plan_update(card(), &edited, SessionOptions::default()).unwrap()
        else {
            panic!("expected a dispatch");
        };
        assert_eq!(request.input.add_tags, vec!["new"]);
        assert_eq!(request.input.remove_tags, vec!["vip"]);
    }

    #[test]
    fn inline_json_is_accepted() {
        let card: GiftCard = load_document(r#"{"id": "inline"}"#, "entity").unwrap();
        assert_eq!(card.id, "inline");
    }
}
