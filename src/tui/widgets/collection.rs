//! Remote collection table and its pagination footer.
//! Thin TUI wrapper over [`crate::view::build_table_view`].

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table, Wrap};

use crate::tui::navigable::TableCursor;
use crate::tui::style::Styles;
use crate::view::common::{PagerViewModel, Placeholder};
use crate::view::{RemoteCollectionView, RowEntity, build_pager_view, build_table_view};

/// Renders the table of `view` with the pager underneath.
pub fn render_collection<T: RowEntity>(
    frame: &mut Frame,
    area: Rect,
    view: &RemoteCollectionView<T>,
    cursor: &mut TableCursor,
    styles: &Styles,
) {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);
    render_table(frame, chunks[0], view, cursor, styles);
    render_pager(frame, chunks[1], &build_pager_view(view), styles);
}

fn render_table<T: RowEntity>(
    frame: &mut Frame,
    area: Rect,
    view: &RemoteCollectionView<T>,
    cursor: &mut TableCursor,
    styles: &Styles,
) {
    let vm = build_table_view(view);
    let block = Block::default()
        .title(format!(" {} ", vm.title))
        .borders(Borders::ALL)
        .border_style(styles.border())
        .style(styles.default());

    frame.render_widget(Clear, area);

    if let Some(placeholder) = &vm.placeholder {
        let (text, style) = match placeholder {
            Placeholder::Loading => ("Loading…".to_string(), styles.dim()),
            Placeholder::Empty(msg) => (msg.clone(), styles.dim()),
            Placeholder::Error(msg) => (format!("{}  (R to retry)", msg), styles.critical()),
        };
        cursor.resolve_selection(&[]);
        let paragraph = Paragraph::new(Span::styled(text, style))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let row_ids: Vec<String> = vm.rows.iter().map(|r| r.id.clone()).collect();
    cursor.resolve_selection(&row_ids);

    // Header with sort indicator
    let headers: Vec<Span> = vm
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let indicator = if Some(i) == vm.sort_column {
                if vm.sort_ascending { "▲" } else { "▼" }
            } else {
                ""
            };
            Span::styled(format!("{}{}", h, indicator), styles.table_header())
        })
        .collect();
    let header = Row::new(headers).style(styles.table_header()).height(1);

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|vr| {
            Row::new(vr.cells.iter().map(|c| Span::raw(c.clone())))
                .style(styles.from_class(vr.style))
                .height(1)
        })
        .collect();

    let mut constraints: Vec<Constraint> =
        vm.widths.iter().map(|&w| Constraint::Length(w)).collect();
    constraints.push(Constraint::Fill(1));

    let table = Table::new(rows, constraints)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(styles.selected());

    frame.render_stateful_widget(table, area, &mut cursor.ratatui_state);
}

/// Renders the one-line pagination footer.
pub fn render_pager(frame: &mut Frame, area: Rect, pager: &PagerViewModel, styles: &Styles) {
    let enabled = |on: bool| if on { styles.help_key() } else { styles.dim() };

    let mut spans = vec![
        Span::styled(" rows ", styles.help()),
        Span::raw(pager.range.clone()),
        Span::styled("  page ", styles.help()),
        Span::raw(pager.page_number.to_string()),
        Span::styled("  size ", styles.help()),
        Span::raw(pager.page_size.to_string()),
        Span::raw("   "),
        Span::styled("◀ prev", enabled(pager.can_go_back)),
        Span::raw("  "),
        Span::styled("next ▶", enabled(pager.can_go_forward)),
    ];
    if pager.fetching {
        spans.push(Span::styled("   Fetching updated data…", styles.warning()));
    }
    if let Some(error) = &pager.error {
        spans.push(Span::styled(format!("   {}  (R to retry)", error), styles.critical()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(styles.default()), area);
}
