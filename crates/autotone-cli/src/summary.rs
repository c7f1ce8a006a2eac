use autotone_core::gamma::GammaCurve;
use autotone_core::histogram::Histogram;
use autotone_core::linear::LinearCurve;
use autotone_core::stats::ImageStats;
use autotone_core::{Channels, CornerPolicy, Image};
use console::Style;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    warning: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            warning: Style::new().yellow(),
        }
    }
}

fn channel_name(count: usize, channel: usize) -> &'static str {
    match (count, channel) {
        (1, _) => "Gray",
        (_, 0) => "Red",
        (_, 1) => "Green",
        _ => "Blue",
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title.apply_to("\u{2550}".repeat(title.chars().count()))
    );
    println!();
}

fn print_stats_section(s: &Styles, stats: &ImageStats) {
    println!("  {}", s.header.apply_to("Statistics"));
    let n = stats.channels.len();
    for (c, st) in stats.channels.iter().enumerate() {
        println!(
            "    {:<14}{}",
            s.label.apply_to(channel_name(n, c)),
            s.value
                .apply_to(format!("mean {:>6.2}  stddev {:>6.2}", st.mean, st.stddev))
        );
    }
    println!();
}

pub fn print_gamma_summary(variant: &str, stats: &ImageStats, curve: &GammaCurve) {
    let s = Styles::new();

    print_title(&s, &format!("Auto Gamma ({variant})"));
    print_stats_section(&s, stats);

    println!("  {}", s.header.apply_to("Gamma"));
    let n = curve.gammas.len();
    for (c, gamma) in curve.gammas.iter().enumerate() {
        println!(
            "    {:<14}{}",
            s.label.apply_to(channel_name(n, c)),
            s.value.apply_to(format!("{gamma:.4}"))
        );
    }
    println!();
}

pub fn print_linear_summary(
    variant: &str,
    policy: CornerPolicy,
    stats: &ImageStats,
    curve: &LinearCurve,
) {
    let s = Styles::new();

    print_title(&s, &format!("Auto Linear Stretch ({variant})"));
    print_stats_section(&s, stats);

    println!("  {}", s.header.apply_to("Corners"));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Policy"),
        s.method.apply_to(format!("{policy:?}"))
    );
    let n = curve.corners.len();
    for (c, k) in curve.corners.iter().enumerate() {
        println!(
            "    {:<14}P1({:.0}, {:.0})  P2({:.0}, {:.0})",
            s.label.apply_to(channel_name(n, c)),
            s.value.apply_to(k.x1),
            s.value.apply_to(k.y1),
            s.value.apply_to(k.x2),
            s.value.apply_to(k.y2)
        );
    }
    println!();
}

pub fn print_histogram_summary(image: &Image, stats: &ImageStats, hist: &Histogram) {
    let s = Styles::new();

    print_title(&s, "Histogram");
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value
            .apply_to(format!("{}x{}", image.width(), image.height()))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Channels"),
        s.method.apply_to(match image.channels() {
            Channels::Gray => "gray",
            Channels::Rgb => "rgb",
        })
    );
    println!();

    print_stats_section(&s, stats);

    println!("  {}", s.header.apply_to("Peaks"));
    let n = hist.bins.len();
    for (c, bins) in hist.bins.iter().enumerate() {
        let (peak, count) = bins
            .iter()
            .enumerate()
            .max_by_key(|&(i, &count)| (count, std::cmp::Reverse(i)))
            .map(|(i, &count)| (i, count))
            .unwrap_or((0, 0));
        println!(
            "    {:<14}{}",
            s.label.apply_to(channel_name(n, c)),
            s.value.apply_to(format!("level {peak:>3}  ({count} px)"))
        );
    }
    if hist.has_shadow_clipping() {
        println!("    {}", s.warning.apply_to("shadow clipping (values at 0)"));
    }
    if hist.has_highlight_clipping() {
        println!(
            "    {}",
            s.warning.apply_to("highlight clipping (values at 255)")
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_names() {
        assert_eq!(channel_name(1, 0), "Gray");
        assert_eq!(channel_name(3, 0), "Red");
        assert_eq!(channel_name(3, 1), "Green");
        assert_eq!(channel_name(3, 2), "Blue");
    }
}
