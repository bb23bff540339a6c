/// # Summary
/// 指数移动平均 (EMA)，增量计算。
///
/// # Logic
/// - 第 0 根：value = price (以首个观测值为种子)
/// - 之后：value = α·price + (1−α)·prev，其中 α = 2/(period+1)
///
/// `is_warm()` 在累计 `period` 根后返回 true，调用方据此跳过预热区。
#[derive(Debug, Clone)]
pub struct Ema {
    alpha: f64,
    value: f64,
    period: usize,
    count: usize,
}

impl Ema {
    /// `period` 为 0 时按 1 处理 (即 EMA 等于价格本身)。
    pub fn new(period: u32) -> Self {
        let period = period.max(1);
        Self {
            alpha: 2.0 / (f64::from(period) + 1.0),
            value: 0.0,
            period: usize::try_from(period).unwrap_or(usize::MAX),
            count: 0,
        }
    }

    /// 喂入一个价格，返回当前 EMA。
    pub fn update(&mut self, price: f64) -> f64 {
        if self.count == 0 {
            self.value = price;
        } else {
            self.value = self.alpha * price + (1.0 - self.alpha) * self.value;
        }
        self.count += 1;
        self.value
    }

    /// 已累计 `period` 根价格。
    pub fn is_warm(&self) -> bool {
        self.count >= self.period
    }
}
