use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::clients::{RecipeClient, RecipeService};
use crate::config::Config;
use crate::console::{render, Command, ServingsChange};
use crate::error::{AppResult, ValidationError};
use crate::utils::logging::log_startup;
use crate::workflow::RecipeOrchestrator;

/// 处理完一条命令后是否继续
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// 应用主结构
///
/// 读终端命令，驱动编排器，把页面写到 `out`
pub struct App<S, W> {
    service: S,
    session: RecipeOrchestrator,
    out: W,
}

impl App<RecipeClient, std::io::Stdout> {
    /// 初始化应用
    pub fn initialize(config: &Config) -> Self {
        log_startup(config);
        Self::with_service(RecipeClient::new(config), std::io::stdout())
    }
}

impl<S: RecipeService, W: Write> App<S, W> {
    pub fn with_service(service: S, out: W) -> Self {
        Self {
            service,
            session: RecipeOrchestrator::new(),
            out,
        }
    }

    pub fn session(&self) -> &RecipeOrchestrator {
        &self.session
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// 运行应用主循环，直到 `quit` 或输入结束
    pub async fn run(&mut self) -> AppResult<()> {
        self.run_with(BufReader::new(tokio::io::stdin())).await
    }

    /// 从任意按行输入读取命令
    ///
    /// 无法按 UTF-8 解码的行会被跳过，其余读错误结束会话
    pub async fn run_with<R: AsyncBufRead + Unpin>(&mut self, input: R) -> AppResult<()> {
        let mut lines = input.lines();

        self.print(render::help())?;
        self.show()?;

        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                    warn!("忽略无法解码的输入行: {}", e);
                    self.print("Could not read that line, please type it again.")?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let flow = match Command::parse(&line) {
                Ok(command) => self.handle(command).await?,
                Err(hint) => {
                    self.print(&hint)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        info!("👋 退出菜谱助手");
        Ok(())
    }

    /// 处理一条命令
    pub async fn handle(&mut self, command: Command) -> AppResult<Flow> {
        debug!("命令: {:?}", command);

        if is_edit(&command) && !self.session.state().is_input() {
            self.print("Type 'new' to start over first.")?;
            return Ok(Flow::Continue);
        }

        match command {
            Command::Add {
                name,
                quantity,
                unit,
            } => {
                if !self.session.add_ingredient(&name, &quantity, unit) {
                    self.print("Both a name and a quantity are needed.")?;
                }
                self.show()?;
            }
            Command::Remove(index) => {
                if self.session.remove_ingredient(index).is_none() {
                    self.print(&format!("There is no ingredient number {}.", index + 1))?;
                }
                self.show()?;
            }
            Command::Servings(change) => {
                match change {
                    ServingsChange::Increment => self.session.increment_servings(),
                    ServingsChange::Decrement => self.session.decrement_servings(),
                    ServingsChange::Set(count) => self.session.set_servings(count),
                }
                self.show()?;
            }
            Command::Meal(meal_type) => {
                self.session.set_meal_type(meal_type);
                self.show()?;
            }
            Command::Time(cooking_time) => {
                self.session.set_cooking_time(cooking_time);
                self.show()?;
            }
            Command::Lang(language) => {
                self.session.set_language(language);
                self.show()?;
            }
            Command::Generate => self.generate().await?,
            Command::Reset => {
                self.session.reset();
                self.show()?;
            }
            Command::Show => self.show()?,
            Command::Help => self.print(render::help())?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    async fn generate(&mut self) -> AppResult<()> {
        let request = match self.session.begin_submit() {
            Ok(request) => request,
            // 错误信息已写入会话，显示在录入页上
            Err(ValidationError::NoIngredients) => return self.show(),
            Err(e) => return self.print(e.user_message()),
        };

        // 先显示等待页，再等待服务返回
        self.show()?;

        // 失败时错误已保存在会话里，由录入页展示
        let _ = self
            .session
            .complete_submit(&self.service, &request)
            .await;

        self.show()
    }

    fn show(&mut self) -> AppResult<()> {
        let screen = render::screen(&self.session);
        self.print(&screen)
    }

    fn print(&mut self, text: &str) -> AppResult<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }
}

fn is_edit(command: &Command) -> bool {
    matches!(
        command,
        Command::Add { .. }
            | Command::Remove(_)
            | Command::Servings(_)
            | Command::Meal(_)
            | Command::Time(_)
            | Command::Lang(_)
            | Command::Generate
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::models::{GeneratedRecipe, Recipe, RecipeRequest, RecipeYield, Unit};
    use std::sync::Mutex;

    /// 记录收到的请求，按顺序返回预设结果
    struct ScriptedService {
        requests: Mutex<Vec<RecipeRequest>>,
        fail: bool,
    }

    impl RecipeService for ScriptedService {
        async fn generate(&self, request: &RecipeRequest) -> Result<GeneratedRecipe, ServiceError> {
            self.requests.lock().unwrap().push(request.clone());
            if self.fail {
                return Err(ServiceError::Status {
                    status: 500,
                    message: Some("kitchen overloaded".to_string()),
                });
            }
            Ok(GeneratedRecipe {
                recipe: Recipe {
                    title: "Masala Omelette".to_string(),
                    description: "Spiced eggs.".to_string(),
                    prep_time: "5 mins".to_string(),
                    cook_time: "5 mins".to_string(),
                    servings: RecipeYield::Count(3),
                    ingredients: vec!["3 eggs".to_string()],
                    instructions: vec!["Beat eggs.".to_string()],
                },
                image_url: "https://images.example.com/omelette.png".to_string(),
            })
        }
    }

    fn app(fail: bool) -> App<ScriptedService, Vec<u8>> {
        App::with_service(
            ScriptedService {
                requests: Mutex::new(Vec::new()),
                fail,
            },
            Vec::new(),
        )
    }

    fn output(app: &App<ScriptedService, Vec<u8>>) -> String {
        String::from_utf8_lossy(app.output()).to_string()
    }

    #[tokio::test]
    async fn test_full_session() {
        let mut app = app(false);

        for line in ["add Eggs 3 pieces", "servings +", "lang hindi", "generate"] {
            let command = Command::parse(line).unwrap();
            assert_eq!(app.handle(command).await.unwrap(), Flow::Continue);
        }

        let requests = app.service.requests.lock().unwrap().clone();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].ingredients_text, "eggs (3 pieces)");
        assert_eq!(requests[0].servings.get(), 3);

        assert_eq!(app.session().state().name(), "recipe");
        let text = output(&app);
        assert!(text.contains("Calculating your perfect recipe..."));
        assert!(text.contains("Masala Omelette"));

        // 菜谱页上不能继续编辑
        app.handle(Command::parse("add rice 100").unwrap()).await.unwrap();
        assert!(output(&app).contains("Type 'new' to start over first."));
        assert_eq!(app.session().ingredients().len(), 1);

        app.handle(Command::Reset).await.unwrap();
        assert!(app.session().state().is_input());
        assert!(app.session().ingredients().is_empty());
    }

    #[tokio::test]
    async fn test_generate_without_ingredients_shows_error() {
        let mut app = app(false);

        app.handle(Command::Generate).await.unwrap();

        assert!(app.session().state().is_input());
        assert!(output(&app).contains("! Please add at least one ingredient."));
        assert!(app.service.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_service_failure_returns_to_input() {
        let mut app = app(true);
        app.handle(Command::Add {
            name: "dal".to_string(),
            quantity: "1".to_string(),
            unit: Unit::Kg,
        })
        .await
        .unwrap();

        app.handle(Command::Generate).await.unwrap();

        assert!(app.session().state().is_input());
        assert_eq!(app.session().error(), "kitchen overloaded");
        assert!(output(&app).contains("! kitchen overloaded"));
    }

    #[tokio::test]
    async fn test_run_skips_undecodable_line() {
        let mut app = app(false);
        let input: &[u8] = b"add egg 2 pieces\n\xff\xfe bad\nservings +\nquit\nadd rice 100\n";

        app.run_with(input).await.unwrap();

        assert_eq!(app.session().ingredients().len(), 1);
        assert_eq!(app.session().servings().get(), 3);
        assert!(output(&app).contains("Could not read that line"));
    }

    #[tokio::test]
    async fn test_run_ends_at_end_of_input() {
        let mut app = app(false);
        let input: &[u8] = b"add tomato 3 pieces";

        app.run_with(input).await.unwrap();

        assert_eq!(app.session().ingredients().len(), 1);
    }

    #[tokio::test]
    async fn test_quit() {
        let mut app = app(false);
        assert_eq!(app.handle(Command::Quit).await.unwrap(), Flow::Quit);
    }
}
