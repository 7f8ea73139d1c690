use std::sync::{Arc, PoisonError, RwLock};

/// StateCell 由调用方持有的快照单元
///
/// 编辑器和集合本身都是纯函数，调用方把上一个快照交给它们，
/// 再通过这里发布返回的下一个快照。`update` 在同一把写锁内完成读-改-写。
#[derive(Debug)]
pub struct StateCell<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> StateCell<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// 当前快照的副本
    pub fn get(&self) -> T {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// 直接替换快照，返回旧值
    pub fn replace(&self, next: T) -> T {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }

    /// 用上一个快照计算并发布下一个快照
    pub fn update<F>(&self, f: F) -> T
    where
        F: FnOnce(&T) -> T,
    {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let next = f(&*guard);
        *guard = next.clone();
        next
    }
}

impl<T: Clone + Default> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
