//! The upload/download panel: a local file browser on the left, the most
//! recent five uploads on the right, and a one-line notice bar below.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{prelude::*, widgets::*};
use throbber_widgets_tui::{Throbber, ThrobberState};
use tokio::sync::mpsc::UnboundedSender;

use crate::components::component::{Component, ComponentRender};
use crate::model::action::Action;
use crate::model::local_data_item::LocalDataItem;
use crate::model::notice::Notice;
use crate::model::state::{ActivePage, State, MAX_TRACKED_FILES};
use crate::model::tracked_file::TrackedFile;
use crate::model::transfer_state::TransferState;

#[derive(Clone)]
struct Props {
    local_table_state: TableState,
    uploads_table_state: TableState,
    local_data: Vec<LocalDataItem>,
    tracked_files: Vec<TrackedFile>,
    current_local_path: String,
    notice: Option<Notice>,
    uploading: bool,
}

impl From<&State> for Props {
    fn from(state: &State) -> Self {
        let st = state.clone();
        Props {
            local_table_state: TableState::default(),
            uploads_table_state: TableState::default(),
            local_data: st.local_data,
            tracked_files: st.tracked_files,
            current_local_path: st.current_local_path,
            notice: st.notice,
            uploading: state.any_upload_in_progress(),
        }
    }
}

pub struct PanelPage {
    pub action_tx: UnboundedSender<Action>,
    props: Props,
    throbber_state: ThrobberState,
}

impl Component for PanelPage {
    fn new(state: &State, action_tx: UnboundedSender<Action>) -> Self
    where
        Self: Sized,
    {
        PanelPage {
            action_tx: action_tx.clone(),
            // set the props
            props: Props::from(state),
            throbber_state: ThrobberState::default(),
        }
        .move_with_state(state)
    }

    fn move_with_state(self, state: &State) -> Self
    where
        Self: Sized,
    {
        let new_props = Props::from(state);
        let mut throbber_state = self.throbber_state;
        throbber_state.calc_next();
        PanelPage {
            props: Props {
                // keep the browser cursor across state pushes
                local_table_state: self.props.local_table_state.clone(),
                ..new_props
            },
            throbber_state,
            ..self
        }
    }

    fn name(&self) -> &str {
        "Upload/Download Panel"
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.move_down_local_table_selection(),
            KeyCode::Char('k') | KeyCode::Up => self.move_up_local_table_selection(),
            KeyCode::Enter => self.handle_selected_local_row(),
            KeyCode::Char('d') => {
                // the download control only exists once something is tracked
                if !self.props.tracked_files.is_empty() {
                    let _ = self.action_tx.send(Action::FetchResults);
                }
            }
            KeyCode::Esc => {
                if self.props.notice.is_some() {
                    let _ = self.action_tx.send(Action::ClearNotice);
                } else {
                    let _ = self.action_tx.send(Action::MoveBackLocal);
                }
            }
            KeyCode::Backspace => {
                let _ = self.action_tx.send(Action::MoveBackLocal);
            }
            KeyCode::Char('?') => {
                let _ = self.action_tx.send(Action::Navigate {
                    page: ActivePage::Help,
                });
            }
            KeyCode::Char('q') => {
                let _ = self.action_tx.send(Action::Exit);
            }
            _ => {}
        }
    }
}

impl PanelPage {
    fn move_up_local_table_selection(&mut self) {
        if self.props.local_data.is_empty() {
            return;
        }
        let i = match self.props.local_table_state.selected() {
            Some(i) => {
                if i == 0_usize {
                    self.props.local_data.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.props.local_table_state.select(Some(i));
    }

    fn move_down_local_table_selection(&mut self) {
        if self.props.local_data.is_empty() {
            return;
        }
        let i = match self.props.local_table_state.selected() {
            Some(i) => {
                if i >= self.props.local_data.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.props.local_table_state.select(Some(i));
    }

    /// Enter descends into directories and uploads files
    fn handle_selected_local_row(&mut self) {
        if let Some(selected_row) = self
            .props
            .local_table_state
            .selected()
            .and_then(|index| self.props.local_data.get(index))
        {
            if selected_row.is_directory {
                let _ = self.action_tx.send(Action::FetchLocalData {
                    path: selected_row.path.clone(),
                });
            } else {
                let _ = self.action_tx.send(Action::UploadFile {
                    item: selected_row.clone(),
                });
            }
        }
    }

    fn get_local_row(&self, item: &LocalDataItem) -> Row {
        if item.is_pdf() {
            Row::new(item.to_columns().clone()).fg(Color::LightGreen)
        } else {
            Row::new(item.to_columns().clone())
        }
    }

    fn get_upload_row(&self, item: &TrackedFile) -> Row {
        let row = Row::new(item.to_columns().clone());
        match &item.transfer_state {
            TransferState::Done => row.fg(Color::Green),
            TransferState::Failed(_) => row.fg(Color::Red),
            TransferState::InProgress => row.fg(Color::Yellow),
            TransferState::Pending => row,
        }
    }

    fn get_local_table(&self, focus_color: Color) -> Table {
        let header = Row::new(vec!["Name", "Size", "Type"])
            .fg(focus_color)
            .bold()
            .underlined()
            .height(1)
            .bottom_margin(0);
        let rows = self
            .props
            .local_data
            .iter()
            .map(|item| PanelPage::get_local_row(self, item));
        let widths = [
            Constraint::Percentage(60),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ];
        Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Local Files [{}]", self.props.current_local_path))
                    .fg(Color::White),
            )
            .highlight_style(
                Style::default()
                    .fg(focus_color)
                    .bg(Color::White)
                    .add_modifier(Modifier::REVERSED),
            )
    }

    fn get_uploads_table(&self, focus_color: Color) -> Table {
        let header = Row::new(vec!["File Name", "Status", "Result URL"])
            .fg(focus_color)
            .bold()
            .underlined()
            .height(1)
            .bottom_margin(0);
        let rows = self
            .props
            .tracked_files
            .iter()
            .map(|item| PanelPage::get_upload_row(self, item));
        let widths = [
            Constraint::Percentage(35),
            Constraint::Percentage(20),
            Constraint::Percentage(45),
        ];
        Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Uploads (most recent {})", MAX_TRACKED_FILES))
                    .fg(Color::White),
            )
            .highlight_style(
                Style::default()
                    .fg(focus_color)
                    .bg(Color::White)
                    .add_modifier(Modifier::REVERSED),
            )
    }

    fn render_activity_line(&self, frame: &mut Frame, area: Rect) {
        if self.props.uploading {
            let throbber = Throbber::default()
                .label("uploading...")
                .style(Style::default().fg(Color::Yellow));
            frame.render_stateful_widget(throbber, area, &mut self.throbber_state.clone());
        } else if let Some(notice) = &self.props.notice {
            let style = if notice.is_error() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            let line = Paragraph::new(Text::from(notice.text.clone()).style(style));
            frame.render_widget(&line, area);
        }
    }

    fn render_key_bar(&self, frame: &mut Frame, area: Rect) {
        let mut hints = vec!["↕ move", "Enter upload/open dir", "Backspace up"];
        if !self.props.tracked_files.is_empty() {
            hints.push("d download results");
        }
        hints.push("? help");
        hints.push("q quit");
        let bar = Paragraph::new(Text::from(hints.join("  |  ")).fg(Color::DarkGray));
        frame.render_widget(&bar, area);
    }
}

impl ComponentRender<()> for PanelPage {
    fn render(&self, frame: &mut Frame, _props: ()) {
        let focus_color = Color::Rgb(98, 114, 164);
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(frame.size());
        let tables = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(outer[0]);

        let local_table = self.get_local_table(focus_color);
        frame.render_stateful_widget(
            &local_table,
            tables[0],
            &mut self.props.local_table_state.clone(),
        );

        if self.props.tracked_files.is_empty() {
            let info = Paragraph::new(Text::from(
                "No uploads yet. Pick a file and press Enter to upload it.",
            ))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Uploads (most recent {})", MAX_TRACKED_FILES))
                    .fg(Color::White),
            );
            frame.render_widget(&info, tables[1]);
        } else {
            let uploads_table = self.get_uploads_table(focus_color);
            frame.render_stateful_widget(
                &uploads_table,
                tables[1],
                &mut self.props.uploads_table_state.clone(),
            );
        }

        self.render_activity_line(frame, outer[1]);
        self.render_key_bar(frame, outer[2]);
    }
}
