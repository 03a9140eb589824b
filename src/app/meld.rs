use crate::convert::MeldCall;
use crate::model::*;
use crate::util::misc::Res;

#[derive(Debug, Clone, clap::Args)]
pub struct MeldArgs {
    /// 副露コード (N要素のm属性)
    pub code: u32,

    /// 副露したプレイヤーの座席 (N要素のwho属性)
    #[arg(short, long, default_value_t = 0)]
    pub who: Seat,
}

// [MeldApp]
// 副露コードを解析してmjai形式で表示
#[derive(Debug)]
pub struct MeldApp {
    args: MeldArgs,
}

impl MeldApp {
    pub fn new(args: MeldArgs) -> Self {
        Self { args }
    }

    pub fn run(&self) -> Res {
        if self.args.who >= SEAT {
            return Err(format!("invalid seat: {}", self.args.who).into());
        }
        let meld = MeldCall::decode(self.args.code);
        println!("{:?}", meld);
        println!("{}", meld.to_action(self.args.who));
        Ok(())
    }
}
