use crate::generator::Generator;
use crate::rule::Config;
use parking_lot::Mutex;
use std::sync::Arc;

/// 可在多个线程间共享的 Generator
///
/// 所有调用串行执行：缓存的 "查询 → 解析 → 写入" 过程在锁内完成，
/// 不会出现同一个 token 被重复输出或读到未完成条目的情况。
/// 对吞吐要求高时，更简单的做法是每个线程各自持有一个 Generator。
#[derive(Debug, Clone)]
pub struct SharedGenerator {
    inner: Arc<Mutex<Generator>>,
}

impl SharedGenerator {
    pub fn new(config: Config) -> Self {
        Self::from(Generator::new(config))
    }

    pub fn generate(&self, code: &str) -> String {
        self.inner.lock().generate(code)
    }

    /// 在锁内访问底层 Generator
    pub fn with<R>(&self, f: impl FnOnce(&Generator) -> R) -> R {
        f(&self.inner.lock())
    }
}

impl From<Generator> for SharedGenerator {
    fn from(generator: Generator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(generator)),
        }
    }
}
