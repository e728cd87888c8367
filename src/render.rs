use crate::models::{PriceSnapshot, NO_DATA_MESSAGE};
use std::fmt::Write;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Bitcoin Price Tracker</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            background-color: #f8f9fa;
            color: #212529;
            padding: 20px;
            margin: 0;
        }
        h1 {
            text-align: center;
            color: #343a40;
        }
        .container {
            max-width: 800px;
            margin: 0 auto;
            background: #fff;
            padding: 20px;
            border-radius: 8px;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
        }
        table {
            width: 100%;
            border-collapse: collapse;
            margin-top: 20px;
        }
        th, td {
            padding: 10px;
            text-align: left;
            border: 1px solid #dee2e6;
        }
        th {
            background-color: #f1f3f5;
        }
        .current {
            font-size: 1.5em;
            margin-top: 10px;
        }
    </style>
</head>
"#;

/// Render the tracker page for a snapshot, or the placeholder heading
/// while no data exists.
pub fn price_page(snapshot: &PriceSnapshot) -> String {
    let (Some(current), Some(average)) = (snapshot.current_price, snapshot.average_price)
    else {
        return format!("<h1>{}</h1>", NO_DATA_MESSAGE);
    };

    let mut rows = String::new();
    for (idx, price) in snapshot.history.iter().enumerate() {
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>${:.2}</td></tr>",
            idx + 1,
            price
        );
    }

    format!(
        "{PAGE_HEAD}<body>\
         <div class=\"container\">\
         <h1>Bitcoin Price Tracker</h1>\
         <div class=\"current\"><strong>Current Bitcoin Price:</strong> ${current:.2}</div>\
         <div class=\"current\"><strong>Average Price (Last 10 Minutes):</strong> ${average:.2}</div>\
         <h2>Price History (Last 10 Minutes)</h2>\
         <table>\
         <thead><tr><th>#</th><th>Price (USD)</th></tr></thead>\
         <tbody>{rows}</tbody>\
         </table>\
         </div>\
         </body>\
         </html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_renders_placeholder() {
        let snapshot = PriceSnapshot {
            current_price: None,
            average_price: None,
            history: vec![],
        };

        let page = price_page(&snapshot);
        assert!(page.contains(NO_DATA_MESSAGE));
        assert!(!page.contains("$0.00"));
        assert!(!page.contains("<table>"));
    }

    #[test]
    fn test_populated_snapshot_renders_indexed_table() {
        let snapshot = PriceSnapshot {
            current_price: Some(68123.45),
            average_price: Some(68000.0),
            history: vec![67900.0, 68050.5, 68123.45],
        };

        let page = price_page(&snapshot);
        assert!(page.contains("<strong>Current Bitcoin Price:</strong> $68123.45"));
        assert!(page.contains("<strong>Average Price (Last 10 Minutes):</strong> $68000.00"));
        assert!(page.contains("<tr><td>1</td><td>$67900.00</td></tr>"));
        assert!(page.contains("<tr><td>2</td><td>$68050.50</td></tr>"));
        assert!(page.contains("<tr><td>3</td><td>$68123.45</td></tr>"));
        assert!(!page.contains(NO_DATA_MESSAGE));
    }
}
