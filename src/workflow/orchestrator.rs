//! 菜谱请求编排 - 流程层
//!
//! 核心职责：持有用户输入，驱动 `Input → Loading → RecipeReady` 状态机，
//! 同一时间最多只有一个菜谱请求在进行。
//!
//! 流程顺序：
//! 1. `begin_submit`：校验食材列表，进入 `Loading`，组装请求
//! 2. 调用菜谱服务（只调用一次）
//! 3. `finish_submit`：成功进入 `RecipeReady`，失败带着错误信息回到 `Input`

use std::time::Instant;

use tracing::{info, warn};

use crate::clients::RecipeService;
use crate::error::{AppError, ServiceError, ValidationError};
use crate::models::{
    CookingTime, GeneratedRecipe, IngredientEntry, IngredientList, Language, MealType,
    Preferences, Recipe, RecipeRequest, Servings, Unit,
};
use crate::utils::logging::{log_outcome, log_request};
use crate::workflow::request_state::RequestState;

/// 等待菜谱服务时显示的文案
pub const LOADING_MESSAGE: &str = "Calculating your perfect recipe...";

/// 菜谱请求编排器
///
/// - 持有食材、份数、偏好这三项输入
/// - 持有当前状态和错误信息
/// - 不持有服务客户端，调用时由外部传入
#[derive(Debug, Clone, Default)]
pub struct RecipeOrchestrator {
    ingredients: IngredientList,
    servings: Servings,
    preferences: Preferences,
    state: RequestState,
    error: String,
}

impl RecipeOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== 只读访问 ==========

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn ingredients(&self) -> &IngredientList {
        &self.ingredients
    }

    pub fn servings(&self) -> Servings {
        self.servings
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// 当前错误信息，没有错误时为空字符串
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.state.recipe()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.state.image_url()
    }

    /// 仅在 `Loading` 时返回等待文案
    pub fn loading_message(&self) -> Option<&'static str> {
        self.state.is_loading().then_some(LOADING_MESSAGE)
    }

    // ========== 本地输入修改 ==========

    /// 添加食材；名称或数量为空时不做任何事
    ///
    /// 添加成功会清除当前错误信息
    pub fn add_ingredient(&mut self, name: &str, quantity: &str, unit: Unit) -> bool {
        let added = self.ingredients.add(name, quantity, unit);
        if added {
            self.error.clear();
        }
        added
    }

    /// 按索引（从0开始）删除食材；越界时不做任何事
    pub fn remove_ingredient(&mut self, index: usize) -> Option<IngredientEntry> {
        self.ingredients.remove(index)
    }

    pub fn increment_servings(&mut self) {
        self.servings.increment();
    }

    pub fn decrement_servings(&mut self) {
        self.servings.decrement();
    }

    /// 直接设置份数，小于 1 时取 1
    pub fn set_servings(&mut self, count: u32) {
        self.servings = Servings::new(count);
    }

    pub fn set_meal_type(&mut self, meal_type: MealType) {
        self.preferences.meal_type = meal_type;
    }

    pub fn set_cooking_time(&mut self, cooking_time: CookingTime) {
        self.preferences.cooking_time = cooking_time;
    }

    pub fn set_language(&mut self, language: Language) {
        self.preferences.language = language;
    }

    // ========== 请求生命周期 ==========

    /// 发起一次菜谱请求并等待结果
    ///
    /// # 返回
    /// - 校验失败：`AppError::Validation`，状态不变，不联系服务
    /// - 服务失败：`AppError::Service`，状态回到 `Input`，错误信息已保存
    pub async fn submit<S: RecipeService>(&mut self, service: &S) -> Result<(), AppError> {
        let request = self.begin_submit()?;
        self.complete_submit(service, &request).await
    }

    /// 对 `begin_submit` 返回的请求调用一次菜谱服务，并写回结果
    ///
    /// 只能在 `Loading` 时调用，否则不联系服务直接返回校验错误
    pub async fn complete_submit<S: RecipeService>(
        &mut self,
        service: &S,
        request: &RecipeRequest,
    ) -> Result<(), AppError> {
        match self.state {
            RequestState::Loading => {}
            RequestState::Input => return Err(ValidationError::RequestNotStarted.into()),
            RequestState::RecipeReady { .. } => {
                return Err(ValidationError::RecipeAlreadyShown.into())
            }
        }

        log_request(request);

        let started = Instant::now();
        let result = service.generate(request).await;
        let elapsed_ms = started.elapsed().as_millis();

        match &result {
            Ok(generated) => log_outcome(elapsed_ms, Ok(generated.recipe.title.as_str())),
            Err(e) => log_outcome(elapsed_ms, Err(e.user_message().as_str())),
        }

        self.finish_submit(result)?;
        Ok(())
    }

    /// 校验输入并进入 `Loading`
    ///
    /// 只能从 `Input` 发起。食材为空时把校验信息写入错误并保持 `Input`。
    pub fn begin_submit(&mut self) -> Result<RecipeRequest, ValidationError> {
        match self.state {
            RequestState::Input => {}
            RequestState::Loading => return Err(ValidationError::RequestInFlight),
            RequestState::RecipeReady { .. } => return Err(ValidationError::RecipeAlreadyShown),
        }

        if self.ingredients.is_empty() {
            let err = ValidationError::NoIngredients;
            self.error = err.user_message().to_string();
            return Err(err);
        }

        self.error.clear();
        self.state = RequestState::Loading;
        info!("⏳ {} 种食材，进入等待状态", self.ingredients.len());

        Ok(RecipeRequest::compose(
            &self.ingredients,
            self.servings,
            &self.preferences,
        ))
    }

    /// 写回菜谱服务的结果
    ///
    /// 不在 `Loading` 时收到的结果直接丢弃
    pub fn finish_submit(
        &mut self,
        result: Result<GeneratedRecipe, ServiceError>,
    ) -> Result<(), ServiceError> {
        if !self.state.is_loading() {
            warn!("当前状态为 {}，忽略菜谱服务结果", self.state);
            return Ok(());
        }

        match result {
            Ok(GeneratedRecipe { recipe, image_url }) => {
                self.error.clear();
                self.state = RequestState::RecipeReady { recipe, image_url };
                Ok(())
            }
            Err(e) => {
                self.error = e.user_message();
                self.state = RequestState::Input;
                Err(e)
            }
        }
    }

    /// 重新开始：清空所有输入、结果和错误
    pub fn reset(&mut self) {
        info!("🔄 重新开始");
        *self = Self::default();
    }
}
