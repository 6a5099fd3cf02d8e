use fiscal_period_builder::*;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let defaults = PeriodRequest::default();

    let seed_date = match args.next() {
        Some(raw) => parse_seed_date(&raw)?,
        None => defaults.seed_date,
    };
    let number_of_periods = match args.next() {
        Some(raw) => parse_period_count(&raw)?,
        None => defaults.number_of_periods,
    };

    let request = PeriodRequest::new(seed_date, number_of_periods);
    let count = request.period_count();

    print!("{}", format_progress_header(request.seed_date));
    let groups = match try_group_by_fiscal_year_with(request.seed_date, count, |period| {
        println!("{}", format_progress_line(period))
    }) {
        Ok(groups) => groups,
        Err(e) => {
            eprintln!("No period groups produced: {}", e);
            Vec::new()
        }
    };

    println!("\n Period Groups");
    println!("{}", render_groups_json(&groups)?);

    Ok(())
}
