use crate::utils::*;
use clap::Args;
use sapper_core as game;
use game::BoardGenerator;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewCellState {
    Hidden,
    Revealed(u8),
    Marked,
    TriggeredMine,
    Mine,
    Misflagged,
}

/// What a cell looks like, mines only show up once the game is lost.
fn cell_state_at(engine: &game::PlayEngine, coords: game::Coord2) -> ViewCellState {
    let Some(cell) = engine.cell_at(coords) else {
        return ViewCellState::Hidden;
    };
    let lost = engine.status() == game::GameStatus::Lost;

    match (cell.status(), cell.is_mine()) {
        (game::CellStatus::Exploded, _) => ViewCellState::TriggeredMine,
        (game::CellStatus::Revealed(count), _) => ViewCellState::Revealed(count),
        (game::CellStatus::Marked, false) if lost => ViewCellState::Misflagged,
        (game::CellStatus::Marked, _) => ViewCellState::Marked,
        (game::CellStatus::Hidden, true) if lost => ViewCellState::Mine,
        (game::CellStatus::Hidden, _) => ViewCellState::Hidden,
    }
}

fn mines_left_text(engine: &game::PlayEngine) -> String {
    let mines_left = engine.remaining_mines().clamp(i32::MIN as isize, i32::MAX as isize);
    format_for_counter(mines_left as i32)
}

fn status_text(status: game::GameStatus) -> &'static str {
    match status {
        game::GameStatus::InProgress => "",
        game::GameStatus::Won => "You Win.",
        game::GameStatus::Lost => "You Lost.",
    }
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::MarkOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::MarkOutcome| outcome.has_update())
    }
}

impl<E> HasUpdate for Result<game::RevealOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::RevealOutcome| outcome.has_update())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Reveal(game::Coord2),
    ToggleMark(game::Coord2),
    NewGame,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    x: game::Coord,
    y: game::Coord,
    cell_state: ViewCellState,
    #[prop_or_default]
    locked: bool,
    on_reveal: Callback<game::Coord2>,
    on_mark: Callback<game::Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use ViewCellState::*;

    let CellProps {
        x,
        y,
        cell_state,
        locked,
        on_reveal,
        on_mark,
    } = props.clone();

    let mut class = classes!(
        "cell",
        match cell_state {
            Hidden => classes!(),
            Revealed(count) => classes!("open", format!("num-{}", count)),
            Marked => classes!("flag"),
            TriggeredMine => classes!("open", "mine", "oops"),
            Mine => classes!("open", "mine"),
            Misflagged => classes!("flag", "wrong"),
        }
    );
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) click", x, y);
        if !locked {
            on_reveal.emit((x, y));
        }
    });

    let oncontextmenu = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        log::trace!("({}, {}) context menu", x, y);
        if !locked {
            on_mark.emit((x, y));
        }
    });

    html! {
        <td {class} {onclick} {oncontextmenu}/>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of cells along each side of the board
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_SIZE)]
    size: game::Coord,

    /// Number of mines to place
    #[arg(long, default_value_t = game::GameConfig::DEFAULT_MINES)]
    mines: game::CellCount,
}

impl GameProps {
    fn game_config(&self) -> game::GameConfig {
        game::GameConfig::new(self.size, self.mines).unwrap_or_else(|err| {
            log::warn!(
                "invalid board {}x{} with {} mines ({}), using defaults",
                self.size,
                self.size,
                self.mines,
                err
            );
            game::GameConfig::default()
        })
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    config: game::GameConfig,
    seed: u64,
    engine: game::PlayEngine,
}

impl GameView {
    fn new_engine(config: game::GameConfig, seed: u64) -> game::PlayEngine {
        log::debug!("new game, seed: {}", seed);
        game::PlayEngine::new(game::RandomBoardGenerator::new(seed).generate(config))
    }

    fn get_game_state_class(&self) -> Classes {
        classes!(match self.engine.status() {
            game::GameStatus::InProgress => "in-progress",
            game::GameStatus::Won => "win",
            game::GameStatus::Lost => "lose",
        })
    }

    fn is_playable(&self) -> bool {
        !self.engine.is_finished()
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let config = props.game_config();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        Self {
            config,
            seed,
            engine: Self::new_engine(config, seed),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Reveal(pos) => {
                log::debug!("reveal cell: {:?}", pos);
                let updated = self
                    .engine
                    .reveal(pos)
                    .inspect_err(|err| log::debug!("reveal {:?} ignored: {}", pos, err))
                    .has_update();
                if updated && self.engine.is_finished() {
                    log::info!("{}", status_text(self.engine.status()));
                    log::debug!("final board:\n{}", self.engine.board());
                }
                updated
            }
            ToggleMark(pos) => {
                log::debug!("mark cell: {:?}", pos);
                self.engine
                    .toggle_mark(pos)
                    .inspect_err(|err| log::debug!("mark {:?} ignored: {}", pos, err))
                    .has_update()
            }
            NewGame => {
                self.seed = js_random_seed();
                self.engine = Self::new_engine(self.config, self.seed);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let size = self.engine.size();
        let game_state_class = self.get_game_state_class();
        let is_playable = self.is_playable();
        let mines_left = mines_left_text(&self.engine);
        let status = status_text(self.engine.status());

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGame
        });
        let on_reveal = ctx.link().callback(Reveal);
        let on_mark = ctx.link().callback(ToggleMark);

        html! {
            <div class="sapper" oncontextmenu={Callback::from(move |e: MouseEvent| e.prevent_default())}>
                <nav>
                    <aside data-mine-count="">{mines_left}</aside>
                    <span><button class={game_state_class} onclick={cb_new_game}/></span>
                </nav>
                <table class={is_playable.then_some("playable")}>
                    {
                        for (0..size).map(|y| html! {
                            <tr>
                                {
                                    for (0..size).map(|x| {
                                        let cell_state = cell_state_at(&self.engine, (x, y));
                                        html! {
                                            <CellView
                                                {x}
                                                {y}
                                                {cell_state}
                                                locked={!is_playable}
                                                on_reveal={on_reveal.clone()}
                                                on_mark={on_mark.clone()}
                                            />
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <p data-status="">{status}</p>
            </div>
        }
    }
}
