//! Plain-text rendering of spots, the slot picker and confirmations

use std::fmt::Write;

use chrono::FixedOffset;

use crate::domain::booking::BookingRecord;
use crate::domain::pricing::{format_amount, CostBreakdown};
use crate::domain::slot::{SlotDescriptor, SlotGrid, SlotState};
use crate::domain::spot::{AvailabilityLevel, SpotRecord};

/// Columns left of the driveway in each grid row
const DRIVEWAY_AFTER: usize = 2;

const BAR_WIDTH: usize = 12;

pub const SELECT_SLOT_PROMPT: &str =
    "Select a Slot: Please select an available parking slot to continue.";

fn stars(rating: f32) -> String {
    let filled = (rating.round().clamp(0.0, 5.0)) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn availability_bar(spot: &SpotRecord) -> String {
    let percent = spot.availability_percent();
    let filled = (percent as usize * BAR_WIDTH) / 100;
    let label = match spot.availability() {
        AvailabilityLevel::Critical => "Almost Full",
        AvailabilityLevel::Low => "Filling up",
        AvailabilityLevel::Plenty => "Plenty",
    };
    format!(
        "[{}{}] {} left · {}% free ({})",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        spot.available,
        percent,
        label
    )
}

/// One line per spot; the focused spot is marked with `>`
pub fn spot_list(spots: &[&SpotRecord], focused: Option<u32>, currency: &str) -> String {
    if spots.is_empty() {
        return "No parking spots match your current filter.".to_string();
    }
    let mut out = String::new();
    for spot in spots {
        let marker = if Some(spot.id) == focused { '>' } else { ' ' };
        let badge = if spot.is_almost_full() { "  ALMOST FULL" } else { "" };
        let _ = writeln!(
            out,
            "{} [{:>2}] {:<28} {:>4} {}/hr  {:>2}/{:<2} free  {:<7} {:>7}{}",
            marker,
            spot.id,
            spot.name,
            spot.price,
            currency,
            spot.available,
            spot.total,
            spot.spot_type.to_string(),
            spot.distance,
            badge
        );
    }
    let _ = write!(out, "{} spot(s)", spots.len());
    out
}

/// Detail card for the focused spot
pub fn spot_card(spot: &SpotRecord, currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  ({})", spot.name, spot.slot_number);
    let _ = writeln!(out, "{}", spot.subtitle);
    let _ = writeln!(
        out,
        "{} {} · {} · {} {}/hr · {}",
        stars(spot.rating),
        spot.rating,
        spot.distance,
        spot.price,
        currency,
        spot.spot_type
    );
    let _ = writeln!(out, "{}", availability_bar(spot));
    if !spot.features.is_empty() {
        let _ = writeln!(out, "Features: {}", spot.features.join(", "));
    }
    let _ = write!(out, "Type 'book' to choose a slot.");
    out
}

fn cell(slot: &SlotDescriptor, selected: Option<&SlotDescriptor>) -> String {
    match slot.state {
        SlotState::Disabled => "    ".to_string(),
        SlotState::Occupied => " XX ".to_string(),
        SlotState::Available if selected.map(|s| s.number) == Some(slot.number) => {
            format!("[{}]", slot.id)
        }
        SlotState::Available => format!(" {} ", slot.id),
    }
}

/// Slot grid with row labels and the driveway gap
pub fn slot_grid(grid: &SlotGrid, selected: Option<&SlotDescriptor>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Available: 07   Selected: [07]   Occupied: XX");
    let _ = writeln!(out, "------------ ENTRANCE ------------");
    for (row_idx, row) in grid.rows().iter().enumerate() {
        let label = SlotGrid::row_label(row_idx).unwrap_or(' ');
        let mut line = format!("{} ", label);
        for (col_idx, slot) in row.iter().enumerate() {
            if col_idx == DRIVEWAY_AFTER {
                line.push_str(" || ");
            }
            line.push_str(&cell(slot, selected));
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out.trim_end().to_string()
}

/// Cost summary block of the slot picker
pub fn cost_summary(cost: &CostBreakdown, currency: &str) -> String {
    format!(
        "Parking fee   {} {} × {}h\nService fee   {}\nTotal         {}",
        cost.unit_price,
        currency,
        cost.hours,
        format_amount(cost.service_fee, currency),
        cost.format_total(currency),
    )
}

/// Label of the picker's confirm button
pub fn confirm_label(selected: Option<&SlotDescriptor>) -> String {
    match selected {
        Some(slot) => format!("Confirm Slot {}  →", slot.id),
        None => "Select a Slot to Continue".to_string(),
    }
}

/// Full slot picker screen
pub fn slot_picker(
    spot: &SpotRecord,
    selected: Option<&SlotDescriptor>,
    cost: &CostBreakdown,
    currency: &str,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} · Choose your slot · {} {} per hour",
        spot.name, spot.price, currency
    );
    let _ = writeln!(out, "{}", slot_grid(&SlotGrid::for_spot(spot), selected));
    if let Some(slot) = selected {
        let _ = writeln!(out, "Slot {} selected · Row {}", slot.id, slot.row_label());
    }
    let _ = writeln!(
        out,
        "Duration: {} hour{}",
        cost.hours,
        if cost.hours > 1 { "s" } else { "" }
    );
    let _ = writeln!(out, "{}", cost_summary(cost, currency));
    let _ = write!(out, "{}", confirm_label(selected));
    out
}

/// Booking confirmation, with times shown at the given UTC offset
pub fn confirmation(record: &BookingRecord, currency: &str, offset: FixedOffset) -> String {
    let local = record.created_at.with_timezone(&offset);
    format!(
        "✓ Booking Confirmed!\n\
         Your parking slot is reserved\n\
         Booking Reference  {}\n\
         Slot {} · {}h · {}\n\
         Location    {}\n\
         Date        {}\n\
         Start time  {}\n\
         End time    {}\n\
         Show at entrance. Type 'done' to finish.",
        record.reference,
        record.slot.id,
        record.duration,
        format_amount(record.total_cost, currency),
        record.spot_name,
        local.format("%-d %b %Y"),
        local.format("%H:%M"),
        record.ends_at().with_timezone(&offset).format("%H:%M"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::BookingReference;
    use crate::domain::pricing::BookingHours;
    use crate::domain::spot::model::sample_spot;
    use chrono::{TimeZone, Utc};

    #[test]
    fn grid_marks_selection_and_gaps() {
        let grid = SlotGrid::with_capacity(7);
        let selected = grid.find("02").cloned();
        let text = slot_grid(&grid, selected.as_ref());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[2], "A  01 [02] ||  03  04  05");
        assert_eq!(lines[3], "B  06  07  ||");
        assert_eq!(lines[5], format!("D{}||", " ".repeat(10)));
    }

    #[test]
    fn confirm_button_label() {
        assert_eq!(confirm_label(None), "Select a Slot to Continue");
        let slot = SlotDescriptor::available(4);
        assert_eq!(confirm_label(Some(&slot)), "Confirm Slot 04  →");
    }

    #[test]
    fn cost_summary_lines() {
        let cost = CostBreakdown::calculate(100, BookingHours::new(3).unwrap());
        assert_eq!(
            cost_summary(&cost, "PKR"),
            "Parking fee   100 PKR × 3h\nService fee   20 PKR\nTotal         320 PKR"
        );
    }

    #[test]
    fn empty_spot_list_message() {
        assert_eq!(
            spot_list(&[], None, "PKR"),
            "No parking spots match your current filter."
        );
    }

    #[test]
    fn spot_list_marks_focus_and_urgency() {
        let calm = sample_spot(1, 100, 10, 12);
        let busy = sample_spot(2, 60, 2, 12);
        let text = spot_list(&[&calm, &busy], Some(2), "PKR");
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("  [ 1]"));
        assert!(lines[1].starts_with("> [ 2]"));
        assert!(lines[1].ends_with("ALMOST FULL"));
        assert_eq!(lines[2], "2 spot(s)");
    }

    #[test]
    fn bar_handles_huge_lots() {
        let spot = sample_spot(1, 100, 50_000_000, 50_000_000);
        assert!(availability_bar(&spot).starts_with("[############] 50000000 left · 100% free"));
    }

    #[test]
    fn card_shows_stars_and_bar() {
        let spot = sample_spot(1, 100, 6, 12);
        let card = spot_card(&spot, "PKR");
        assert!(card.contains("★★★★★"));
        assert!(card.contains("[######......] 6 left · 50% free (Filling up)"));
    }

    #[test]
    fn confirmation_uses_offset() {
        let record = BookingRecord {
            reference: BookingReference::new("PW-AB12CD"),
            spot_id: 1,
            spot_name: "Gulberg Galleria Parking".into(),
            slot: SlotDescriptor::available(7),
            duration: 3,
            total_cost: 320,
            cost: CostBreakdown::calculate(100, BookingHours::new(3).unwrap()),
            created_at: Utc.with_ymd_and_hms(2024, 5, 10, 9, 15, 0).unwrap(),
        };
        let pkt = FixedOffset::east_opt(5 * 3600).unwrap();
        let text = confirmation(&record, "PKR", pkt);
        assert!(text.contains("Booking Reference  PW-AB12CD"));
        assert!(text.contains("Slot 07 · 3h · 320 PKR"));
        assert!(text.contains("Date        10 May 2024"));
        assert!(text.contains("Start time  14:15"));
        assert!(text.contains("End time    17:15"));
    }
}
