//! Customer detail popup: customer card plus locally paged order list.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Row, Table};

use crate::fmt::{format_location, format_opt, truncate};
use crate::tui::style::Styles;
use crate::view::{DetailOrdersSubview, DetailStatus, detail_order_columns};

use super::detail_common::{centered_rect, hint_line, kv, render_popup_block, section};

/// Lines of the customer card above the order table.
const CARD_HEIGHT: u16 = 7;

pub fn render_customer_detail(
    frame: &mut Frame,
    area: Rect,
    detail: &DetailOrdersSubview,
    styles: &Styles,
) {
    let popup_area = centered_rect(90, 85, area);
    let customer = detail.customer();
    let inner = render_popup_block(
        frame,
        popup_area,
        &format!("Customer {}", customer.id),
        styles,
    );

    let chunks = Layout::vertical([
        Constraint::Length(CARD_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(inner);

    let card = vec![
        section("Customer", styles),
        kv("Company", &customer.company_name, styles),
        kv("Contact", &customer.contact_name, styles),
        kv("Title", &format_opt(customer.contact_title.as_deref()), styles),
        kv(
            "Location",
            &format_location(customer.city.as_deref(), customer.country.as_deref()),
            styles,
        ),
        kv("Phone", &format_opt(customer.phone.as_deref()), styles),
        section("Orders", styles),
    ];
    frame.render_widget(Paragraph::new(card).style(styles.default()), chunks[0]);

    match detail.status() {
        DetailStatus::Loading => {
            frame.render_widget(
                Paragraph::new(Span::styled("Loading orders…", styles.dim())),
                chunks[1],
            );
        }
        DetailStatus::Error(msg) => {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("{}  (R to retry)", msg),
                    styles.critical(),
                )),
                chunks[1],
            );
        }
        DetailStatus::Ready if detail.total() == 0 => {
            frame.render_widget(
                Paragraph::new(Span::styled("No orders for this customer", styles.dim())),
                chunks[1],
            );
        }
        DetailStatus::Ready => render_orders(frame, chunks[1], detail, styles),
    }

    let mut footer = hint_line(&[("←/p", "prev"), ("→/n", "next"), ("Esc", "close")], styles);
    footer.spans.insert(
        0,
        Span::styled(
            format!("{}  page {}   ", detail.range_label(), detail.page_index() + 1),
            styles.help(),
        ),
    );
    frame.render_widget(Paragraph::new(footer).style(styles.default()), chunks[2]);
}

fn render_orders(frame: &mut Frame, area: Rect, detail: &DetailOrdersSubview, styles: &Styles) {
    let columns = detail_order_columns();

    let header = Row::new(
        columns
            .iter()
            .map(|c| Span::styled(c.header, styles.table_header())),
    )
    .style(styles.table_header())
    .height(1);

    let rows: Vec<Row> = detail
        .visible()
        .iter()
        .map(|order| {
            Row::new(
                columns
                    .iter()
                    .map(|c| Line::from(truncate(&c.cell(order), c.width as usize))),
            )
            .style(styles.default())
            .height(1)
        })
        .collect();

    let constraints: Vec<Constraint> = columns
        .iter()
        .map(|c| Constraint::Length(c.width))
        .collect();

    let table = Table::new(rows, constraints)
        .header(header)
        .column_spacing(1);
    frame.render_widget(table, area);
}
