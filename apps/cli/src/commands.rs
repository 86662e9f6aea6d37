use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use tradeking_quotes::query::quotes_endpoint;
use tradeking_quotes::{
    registry, Credentials, FieldDefinition, HttpExecutor, InstrumentKind, QuoteClient, QuoteQuery,
    QuoteResult, UnsignedRequests,
};

use crate::cli::Command;
use crate::config::Config;

pub async fn run(command: Command, config: &Config) -> anyhow::Result<()> {
    match command {
        Command::Fields { kind } => {
            let kinds = match kind {
                Some(kind) => vec![kind],
                None => vec![InstrumentKind::Equity, InstrumentKind::Derivative],
            };
            for kind in kinds {
                for line in render_catalog(kind) {
                    println!("{}", line);
                }
            }
        }
        Command::Uri {
            symbol,
            option,
            fields,
        } => {
            let query = build_query(&symbol, option, &fields)?;
            let endpoint = quotes_endpoint(&config.base_url);
            println!("symbol: {}", query.target_symbol());
            println!("uri:    {}", query.request_uri(&endpoint));
        }
        Command::Decode { kind, file, fields } => {
            let body = read_body(file.as_deref())?;
            let result = QuoteResult::parse(&body, kind)?;
            let selected = resolve_fields(kind, &fields)?;
            for line in render_result(&result, &selected) {
                println!("{}", line);
            }
        }
        Command::Quote {
            symbol,
            option,
            fields,
            raw,
        } => {
            let query = build_query(&symbol, option, &fields)?;
            let credentials = Credentials::from_env()?;
            let executor = HttpExecutor::with_timeout(
                credentials,
                Arc::new(UnsignedRequests),
                config.request_timeout,
            );
            let client = QuoteClient::with_base_url(executor, config.base_url.as_str());

            tracing::info!("Fetching quote for {}", query.target_symbol());
            let result = client.execute(&query).await?;

            if raw {
                println!("{}", serde_json::to_string_pretty(result.quote_json())?);
            } else {
                let selected = resolve_fields(query.kind(), &fields)?;
                for line in render_result(&result, &selected) {
                    println!("{}", line);
                }
            }
        }
    }
    Ok(())
}

fn build_query(symbol: &str, option: bool, tags: &[String]) -> anyhow::Result<QuoteQuery> {
    let query = if option {
        QuoteQuery::option_symbol(symbol)?
    } else {
        QuoteQuery::equity(symbol)?
    };
    let fields = resolve_fields(query.kind(), tags)?;
    Ok(query.add_all(Some(fields))?)
}

/// Look up each tag in the registry for `kind`.
fn resolve_fields(
    kind: InstrumentKind,
    tags: &[String],
) -> anyhow::Result<Vec<&'static FieldDefinition>> {
    let registry = registry::for_kind(kind);
    tags.iter()
        .map(|tag| {
            registry
                .find_by_tag(tag)
                .ok_or_else(|| anyhow!("unknown {} field '{}', see `tk-quotes fields`", kind, tag))
        })
        .collect()
}

fn read_body(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("failed to read response body from stdin")?;
            Ok(body)
        }
    }
}

fn render_catalog(kind: InstrumentKind) -> Vec<String> {
    let registry = registry::for_kind(kind);
    let mut lines = vec![format!("# {} ({} fields)", kind, registry.len())];
    lines.extend(registry.all().iter().map(|field| {
        format!(
            "{:<20} {:<40} {}",
            field.tag(),
            field.label(),
            field.description()
        )
    }));
    lines
}

/// `Label: value` lines, for the selected fields or for everything captured.
fn render_result(result: &QuoteResult, selected: &[&FieldDefinition]) -> Vec<String> {
    if selected.is_empty() {
        return result
            .iter()
            .map(|(field, value)| format!("{}: {}", field.display_name(), value))
            .collect();
    }

    selected
        .iter()
        .map(|field| match result.get(field) {
            Some(value) => format!("{}: {}", field.display_name(), value),
            None => format!("{}: (not returned)", field.display_name()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tradeking_quotes::fields::equity;

    const BODY: &str =
        r#"{"response":{"quotes":{"quote":{"bid":"10.4","ask":"10.5","extra":"1"}}}}"#;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_build_equity_query() {
        let query = build_query("msft", false, &tags(&["ask", "bid", "ask"])).unwrap();
        assert_eq!(query.target_symbol(), "MSFT");
        assert_eq!(query.tags(), &["ask", "bid"]);
    }

    #[test]
    fn test_build_option_query_uses_derivative_registry() {
        let query = build_query("SYM991217P00012500", true, &tags(&["strikeprice"])).unwrap();
        assert_eq!(query.kind(), InstrumentKind::Derivative);
        assert_eq!(query.tags(), &["strikeprice"]);

        assert!(build_query("MSFT", false, &tags(&["strikeprice"])).is_err());
    }

    #[test]
    fn test_unknown_tag_is_reported() {
        let err = resolve_fields(InstrumentKind::Equity, &tags(&["nope"])).unwrap_err();
        assert!(err.to_string().contains("unknown equity field 'nope'"));
    }

    #[test]
    fn test_render_catalog_header() {
        let lines = render_catalog(InstrumentKind::Equity);
        assert_eq!(lines.len(), registry::equity().len() + 1);
        assert!(lines[0].starts_with("# equity"));
        assert!(lines[1].starts_with("ask"));
    }

    #[test]
    fn test_render_all_captured_fields() {
        let result = QuoteResult::parse(BODY, InstrumentKind::Equity).unwrap();
        assert_eq!(
            render_result(&result, &[]),
            vec!["Ask Price: 10.5", "Bid Price: 10.4"]
        );
    }

    #[test]
    fn test_render_selected_fields() {
        let result = QuoteResult::parse(BODY, InstrumentKind::Equity).unwrap();
        let lines = render_result(&result, &[&equity::BID_PRICE, &equity::YEARLY_HIGH]);
        assert_eq!(lines, vec!["Bid Price: 10.4", "Yearly High: (not returned)"]);
    }
}
