use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use merlion_id::ValidationResult;
use merlion_predict::models::{
    BallProbability, DatasetSummary, FourdDraw, FourdPrediction, LegacyDraw, PairPrediction,
    PositionProbability, ProbabilityTag, TotoDraw, TotoPrediction,
};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub fn display_validation(result: &ValidationResult) {
    let mut table = new_table(vec!["Status", "Normalized", "Reason"]);
    let (status, color) = if result.valid {
        ("VALID", Color::Green)
    } else {
        ("INVALID", Color::Red)
    };
    table.add_row(vec![
        Cell::new(status).fg(color),
        Cell::new(&result.normalized),
        Cell::new(result.reason.as_deref().unwrap_or("—")),
    ]);
    println!("{table}");
}

pub fn display_generated(values: &[String]) {
    let mut table = new_table(vec!["#", "Value"]);
    for (i, value) in values.iter().enumerate() {
        table.add_row(vec![&format!("{}", i + 1), value]);
    }
    println!("{table}");
}

pub fn display_fourd_prediction(prediction: &FourdPrediction) {
    println!("\n🎲 4D picks\n");
    let mut table = new_table(vec!["#", "Number", "Pool probability"]);
    for (i, pick) in prediction.picks.iter().enumerate() {
        table.add_row(vec![
            &format!("{}", i + 1),
            &pick.value,
            &format!("{:.4}", pick.probability),
        ]);
    }
    println!("{table}");

    display_position_probabilities(&prediction.position_probabilities);
}

pub fn display_position_probabilities(probs: &[PositionProbability]) {
    println!("\n📊 Digit probability per position\n");
    let mut header = vec!["Position".to_string()];
    header.extend((0..10).map(|d| d.to_string()));
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for row in probs {
        let mut cells = vec![format!("{}", row.position)];
        cells.extend(row.digits.iter().map(|p| format!("{:.3}", p)));
        table.add_row(cells);
    }
    println!("{table}");
}

pub fn display_toto_prediction(prediction: &TotoPrediction) {
    println!("\n🎲 Toto sets\n");
    let mut table = new_table(vec!["#", "Numbers", "Additional", "Confidence"]);
    for (i, set) in prediction.sets.iter().enumerate() {
        let numbers = set
            .numbers
            .iter()
            .map(|b| format!("{:2}", b))
            .collect::<Vec<_>>()
            .join(" - ");
        table.add_row(vec![
            &format!("{}", i + 1),
            &numbers,
            &format!("{:2}", set.additional),
            &format!("{:.4}", set.confidence),
        ]);
    }
    println!("{table}");

    display_ball_probabilities(&prediction.ball_probabilities, 10);
}

pub fn display_ball_probabilities(probs: &[BallProbability], limit: usize) {
    println!("\n📊 Ball probabilities (top {limit})\n");
    let mut table = new_table(vec!["Ball", "Probability", "Tag"]);
    for prob in probs.iter().take(limit) {
        let color = match prob.tag {
            ProbabilityTag::Hot => Color::Green,
            ProbabilityTag::Cold => Color::Red,
            ProbabilityTag::Normal => Color::White,
        };
        table.add_row(vec![
            Cell::new(format!("{:2}", prob.ball)),
            Cell::new(format!("{:.4}", prob.probability)),
            Cell::new(prob.tag.to_string()).fg(color),
        ]);
    }
    println!("{table}");
}

pub fn display_pair_prediction(prediction: &PairPrediction) {
    println!("\n🎲 Pair picks\n");
    let mut table = new_table(vec!["#", "Pair", "Pool probability"]);
    for (i, pick) in prediction.picks.iter().enumerate() {
        table.add_row(vec![
            &format!("{}", i + 1),
            &format!("{} / {}", &pick.value[0..2], &pick.value[2..4]),
            &format!("{:.4}", pick.probability),
        ]);
    }
    println!("{table}");
}

pub fn display_top_pairs(pairs: &[(String, f64)], limit: usize) {
    println!("\n📊 Top scored pairs\n");
    let mut table = new_table(vec!["Pair", "Score"]);
    for (value, score) in pairs.iter().take(limit) {
        table.add_row(vec![
            &format!("{} / {}", &value[0..2], &value[2..4]),
            &format!("{:.4}", score),
        ]);
    }
    println!("{table}");
}

pub fn display_summary(label: &str, summary: &DatasetSummary) {
    println!("\n{label}");
    println!("  Rows          : {}", summary.total_rows);
    println!("  Unique values : {}", summary.unique_values);
    println!("  Date range    : {} to {}", summary.date_from, summary.date_to);
}

pub fn display_fourd_draws(draws: &[FourdDraw], last: usize) {
    let mut table = new_table(vec!["Date", "Draw", "1st", "2nd", "3rd"]);
    for draw in draws.iter().take(last) {
        table.add_row(vec![
            draw.draw_date,
            draw.draw_no,
            draw.numbers[0],
            draw.numbers[1],
            draw.numbers[2],
        ]);
    }
    println!("{table}");
}

pub fn display_toto_draws(draws: &[TotoDraw], last: usize) {
    let mut table = new_table(vec!["Date", "Draw", "Winning", "Additional"]);
    for draw in draws.iter().take(last) {
        let winning = draw
            .winning
            .iter()
            .map(|b| format!("{:2}", b))
            .collect::<Vec<_>>()
            .join(" - ");
        table.add_row(vec![
            draw.draw_date.to_string(),
            draw.draw_no.to_string(),
            winning,
            format!("{:2}", draw.additional),
        ]);
    }
    println!("{table}");
}

pub fn display_legacy_draws(draws: &[LegacyDraw], last: usize) {
    let mut table = new_table(vec!["Date", "Numbers"]);
    for draw in draws.iter().take(last) {
        let numbers = draw
            .numbers
            .iter()
            .map(|b| format!("{:2}", b))
            .collect::<Vec<_>>()
            .join(" - ");
        table.add_row(vec![draw.date.to_string(), numbers]);
    }
    println!("{table}");
}
