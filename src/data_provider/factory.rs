use crate::DataProvider;
use log::debug;

pub struct DataProviderFactory;

impl DataProviderFactory {
    pub fn create<T: DataProvider>(args: T::Args) -> Result<T, T::ErrorKind> {
        debug!("Creating {}", std::any::type_name::<T>());
        T::new(args)
    }
}
