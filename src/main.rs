// Análise Full CLI: process one or more account reports and
// export the consolidated workbook.
//
// Usage:
//   analise-full [--config perfil.json] [--out saida.xlsx] \
//       CONTA=relatorio.xlsx[,custos.xlsx] ...
//
// Each positional argument names an account and its FULL report;
// an optional second path after the comma is the cost sheet.

use analise_full::engine::{consolidate, cross_account_rollup, replenishment_plan, DbmEngine};
use analise_full::{logging, AnalysisConfig, AnalysisSession, CostAlert, WorkbookExporter};
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

struct AccountArg {
    account: String,
    report: PathBuf,
    costs: Option<PathBuf>,
}

struct CliArgs {
    config: Option<PathBuf>,
    out: PathBuf,
    accounts: Vec<AccountArg>,
}

fn usage() -> &'static str {
    "uso: analise-full [--config perfil.json] [--out saida.xlsx] \
     CONTA=relatorio.xlsx[,custos.xlsx] ..."
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<CliArgs> {
    let mut config = None;
    let mut out = PathBuf::from("AnaliseFull.xlsx");
    let mut accounts = Vec::new();

    let mut args = args;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args.next().context("--config exige um caminho")?;
                config = Some(PathBuf::from(value));
            }
            "--out" => {
                let value = args.next().context("--out exige um caminho")?;
                out = PathBuf::from(value);
            }
            "--help" | "-h" => {
                println!("{}", usage());
                std::process::exit(0);
            }
            positional => {
                let (account, paths) = positional
                    .split_once('=')
                    .with_context(|| format!("argumento inválido '{positional}'; {}", usage()))?;
                let account = account.trim();
                if account.is_empty() {
                    bail!("nome de conta vazio em '{positional}'");
                }
                let mut parts = paths.splitn(2, ',');
                let report = PathBuf::from(parts.next().unwrap_or_default());
                let costs = parts
                    .next()
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from);
                accounts.push(AccountArg {
                    account: account.to_string(),
                    report,
                    costs,
                });
            }
        }
    }

    if accounts.is_empty() {
        bail!("nenhuma conta informada; {}", usage());
    }
    Ok(CliArgs {
        config,
        out,
        accounts,
    })
}

fn main() -> Result<()> {
    logging::init();

    tracing::info!("{} v{}", analise_full::APP_NAME, analise_full::VERSION);

    let cli = parse_args(std::env::args().skip(1))?;

    let config = match &cli.config {
        Some(path) => AnalysisConfig::load_from_file(path)
            .with_context(|| format!("perfil de configuração: {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    let mut session = AnalysisSession::new(config);
    for arg in &cli.accounts {
        let analysis = session
            .load_account(&arg.account, &arg.report, arg.costs.as_deref())
            .with_context(|| format!("conta {}", arg.account))?;

        tracing::info!(
            account = %analysis.account,
            skus = analysis.rows.len(),
            vendas_30d = analysis.total_sales_30d(),
            estoque = analysis.total_stock(),
            custo_total = analysis.total_cost(),
            alertas_vermelhos = analysis.alert_count(CostAlert::RedAlert),
            revisar_custo = analysis.alert_count(CostAlert::NeedsCostReview),
            "resumo da conta"
        );
    }

    let report = consolidate(&session);
    let rollups = cross_account_rollup(&report);
    let thresholds = session.config().thresholds.clone();
    let plan = replenishment_plan(&rollups, &DbmEngine::new(&thresholds));

    tracing::info!(
        linhas = report.len(),
        skus = rollups.len(),
        vendas_30d = report.total_sales_30d(),
        estoque = report.total_stock(),
        "consolidado pronto"
    );

    WorkbookExporter::new().export_to_file(&session, &report, &rollups, &plan, &cli.out)?;
    tracing::info!(arquivo = %cli.out.display(), "exportação concluída");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn args<'a>(list: &'a [&'a str]) -> impl Iterator<Item = String> + 'a {
        list.iter().map(|s| s.to_string())
    }

    #[test]
    fn test_parse_account_with_costs() {
        let cli = parse_args(args(&["VALE RACE=full.xlsx,custos.xlsx"])).unwrap();
        assert_eq!(cli.accounts.len(), 1);
        assert_eq!(cli.accounts[0].account, "VALE RACE");
        assert_eq!(cli.accounts[0].report, Path::new("full.xlsx"));
        assert_eq!(cli.accounts[0].costs.as_deref(), Some(Path::new("custos.xlsx")));
    }

    #[test]
    fn test_parse_flags_and_defaults() {
        let cli = parse_args(args(&[
            "--out",
            "resultado.xlsx",
            "VANPARTS=relatorio.csv",
        ]))
        .unwrap();
        assert_eq!(cli.out, Path::new("resultado.xlsx"));
        assert!(cli.config.is_none());
        assert!(cli.accounts[0].costs.is_none());
    }

    #[test]
    fn test_parse_requires_accounts() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["sem-igual.xlsx"])).is_err());
    }
}
